//! Packable items and their material-buffer padding.
//!
//! An [`Item`] carries its raw edge lengths together with a material buffer.
//! Packing algorithms work on the *padded* form (every edge grown by the
//! buffer) so that they plan room for packing material, and the placement
//! they write back is converted to the caller's frame by
//! [`Item::unpad_measurements`].

use crate::numeric::{self, vec3, Vec3};
use crate::{Error, Result};
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

fn origin() -> Vec3 {
    vec3(Decimal::ZERO, Decimal::ZERO, Decimal::ZERO)
}

/// An item to be packed, also holding its post-packing placement.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "ItemRepr"))]
pub struct Item {
    /// Caller-assigned identifier; not required to be unique.
    id: String,

    /// Current edge lengths (dim1, dim2, dim3), padded or not.
    dimensions: Vec3,

    /// Number of identical items this value stands for.
    quantity: u32,

    /// Weight (informational).
    weight: Decimal,

    /// Unit cost (informational).
    unit_cost: Decimal,

    /// Clearance added to every edge while padded.
    material_buffer: Decimal,

    /// Whether `dimensions` currently include the material buffer.
    padded: bool,

    /// The caller built this item from dimensions that already include
    /// the buffer.
    pre_padded: bool,

    /// Product of the dimensions as of the last construction or pad.
    volume: Decimal,

    /// Set by a packing algorithm once the item has been placed.
    packed: bool,

    /// Placement origin within the container.
    position: Vec3,

    /// Edge lengths along x, y, z in the orientation the algorithm chose.
    pack_dimensions: Vec3,
}

impl Item {
    /// Starts building an item with the given ID and raw dimensions.
    pub fn builder(
        id: impl Into<String>,
        dim1: Decimal,
        dim2: Decimal,
        dim3: Decimal,
    ) -> ItemBuilder {
        ItemBuilder {
            id: id.into(),
            dimensions: vec3(dim1, dim2, dim3),
            quantity: 1,
            weight: Decimal::ZERO,
            unit_cost: Decimal::ZERO,
            material_buffer: Decimal::ZERO,
            already_padded: false,
        }
    }

    /// Grows every dimension by the material buffer.
    ///
    /// Does nothing if the item is already padded. The volume is recomputed
    /// from the padded dimensions. On overflow the item is left untouched.
    pub fn pad_measurements(&mut self) -> Result<()> {
        if self.padded {
            return Ok(());
        }

        let dimensions = numeric::grow(&self.dimensions, self.material_buffer)?;
        let volume = numeric::volume(&dimensions)?;

        self.dimensions = dimensions;
        self.volume = volume;
        self.padded = true;
        Ok(())
    }

    /// Restores the raw dimensions and re-centres the placement.
    ///
    /// Does nothing if the item is not padded. Each coordinate moves forward
    /// by half the buffer, since the whole buffer was added to the edge
    /// length while the item was packed.
    ///
    /// The volume is *not* recomputed: it keeps reporting the padded volume
    /// until the next pad. Use [`Item::current_volume`] for the product of
    /// the restored dimensions.
    pub fn unpad_measurements(&mut self) -> Result<()> {
        if !self.padded {
            return Ok(());
        }

        let dimensions = numeric::shrink(&self.dimensions, self.material_buffer)?;
        let position = numeric::grow(&self.position, numeric::half(self.material_buffer)?)?;

        self.dimensions = dimensions;
        self.position = position;
        self.padded = false;
        Ok(())
    }

    /// Records where a packing algorithm placed this item.
    pub fn set_placement(&mut self, position: Vec3, pack_dimensions: Vec3) {
        self.position = position;
        self.pack_dimensions = pack_dimensions;
        self.packed = true;
    }

    /// Forgets any previous placement.
    pub fn clear_placement(&mut self) {
        self.position = origin();
        self.pack_dimensions = origin();
        self.packed = false;
    }

    /// One unit-quantity copy per counted item.
    pub fn expand_units(&self) -> impl Iterator<Item = Item> + '_ {
        (0..self.quantity).map(move |_| {
            let mut unit = self.clone();
            unit.quantity = 1;
            unit
        })
    }

    /// Returns the item ID.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the current dimensions.
    pub fn dimensions(&self) -> &Vec3 {
        &self.dimensions
    }

    /// Returns the first dimension.
    pub fn dim1(&self) -> Decimal {
        self.dimensions.x
    }

    /// Returns the second dimension.
    pub fn dim2(&self) -> Decimal {
        self.dimensions.y
    }

    /// Returns the third dimension.
    pub fn dim3(&self) -> Decimal {
        self.dimensions.z
    }

    /// Returns the quantity.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns the weight.
    pub fn weight(&self) -> Decimal {
        self.weight
    }

    /// Returns the unit cost.
    pub fn unit_cost(&self) -> Decimal {
        self.unit_cost
    }

    /// Returns the material buffer.
    pub fn material_buffer(&self) -> Decimal {
        self.material_buffer
    }

    /// Returns whether the dimensions currently include the buffer.
    pub fn is_padded(&self) -> bool {
        self.padded
    }

    /// Returns true if the dimensions are in the form packing algorithms
    /// expect: padded here, or declared as already padded at construction.
    pub fn is_pack_ready(&self) -> bool {
        self.padded || self.pre_padded
    }

    /// Returns the stored volume.
    ///
    /// This is the product of the dimensions at construction or at the most
    /// recent pad. After [`Item::unpad_measurements`] it still holds the
    /// padded volume.
    pub fn volume(&self) -> Decimal {
        self.volume
    }

    /// Product of the dimensions as they are right now.
    pub fn current_volume(&self) -> Result<Decimal> {
        numeric::volume(&self.dimensions)
    }

    /// Stored volume multiplied by the quantity.
    pub fn total_volume(&self) -> Result<Decimal> {
        self.volume
            .checked_mul(Decimal::from(self.quantity))
            .ok_or_else(|| {
                Error::NumericRange(format!("total volume of item '{}'", self.id))
            })
    }

    /// Returns whether a packing algorithm placed this item.
    pub fn is_packed(&self) -> bool {
        self.packed
    }

    /// Returns the placement origin.
    pub fn position(&self) -> &Vec3 {
        &self.position
    }

    /// Returns the x coordinate of the placement.
    pub fn coord_x(&self) -> Decimal {
        self.position.x
    }

    /// Returns the y coordinate of the placement.
    pub fn coord_y(&self) -> Decimal {
        self.position.y
    }

    /// Returns the z coordinate of the placement.
    pub fn coord_z(&self) -> Decimal {
        self.position.z
    }

    /// Returns the packed orientation's edge lengths.
    ///
    /// These stay in the padded frame the algorithm worked in.
    pub fn pack_dimensions(&self) -> &Vec3 {
        &self.pack_dimensions
    }

    /// Returns the packed edge length along x.
    pub fn pack_dim_x(&self) -> Decimal {
        self.pack_dimensions.x
    }

    /// Returns the packed edge length along y.
    pub fn pack_dim_y(&self) -> Decimal {
        self.pack_dimensions.y
    }

    /// Returns the packed edge length along z.
    pub fn pack_dim_z(&self) -> Decimal {
        self.pack_dimensions.z
    }
}

/// Builder for [`Item`].
#[derive(Debug, Clone)]
pub struct ItemBuilder {
    id: String,
    dimensions: Vec3,
    quantity: u32,
    weight: Decimal,
    unit_cost: Decimal,
    material_buffer: Decimal,
    already_padded: bool,
}

impl ItemBuilder {
    /// Sets the quantity (default 1).
    pub fn quantity(mut self, n: u32) -> Self {
        self.quantity = n;
        self
    }

    /// Sets the weight.
    pub fn weight(mut self, weight: Decimal) -> Self {
        self.weight = weight;
        self
    }

    /// Sets the unit cost.
    pub fn unit_cost(mut self, cost: Decimal) -> Self {
        self.unit_cost = cost;
        self
    }

    /// Sets the clearance added to every edge.
    pub fn material_buffer(mut self, buffer: Decimal) -> Self {
        self.material_buffer = buffer;
        self
    }

    /// Declares that the dimensions already include the buffer.
    ///
    /// The item is then not padded at construction, and stays unpadded as
    /// far as [`Item::is_padded`] is concerned. [`Item::is_pack_ready`]
    /// reports it as ready for a packing algorithm.
    pub fn already_padded(mut self, already_padded: bool) -> Self {
        self.already_padded = already_padded;
        self
    }

    /// Validates the input and builds the item.
    ///
    /// A positive buffer is applied immediately unless the dimensions were
    /// declared as already padded.
    pub fn build(self) -> Result<Item> {
        check_geometry(&self.id, &self.dimensions, self.material_buffer)?;

        let volume = numeric::volume(&self.dimensions)?;
        let mut item = Item {
            id: self.id,
            dimensions: self.dimensions,
            quantity: self.quantity,
            weight: self.weight,
            unit_cost: self.unit_cost,
            material_buffer: self.material_buffer,
            padded: false,
            pre_padded: self.already_padded,
            volume,
            packed: false,
            position: origin(),
            pack_dimensions: origin(),
        };

        if !self.already_padded && self.material_buffer > Decimal::ZERO {
            item.pad_measurements()?;
        }

        Ok(item)
    }
}

fn check_geometry(id: &str, dimensions: &Vec3, material_buffer: Decimal) -> Result<()> {
    if dimensions.iter().any(|d| *d < Decimal::ZERO) {
        return Err(Error::InvalidItem(format!(
            "Dimensions for '{}' cannot be negative",
            id
        )));
    }

    if material_buffer < Decimal::ZERO {
        return Err(Error::InvalidItem(format!(
            "Material buffer for '{}' cannot be negative",
            id
        )));
    }

    Ok(())
}

/// Wire form of [`Item`], checked before it becomes one.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct ItemRepr {
    id: String,
    dimensions: Vec3,
    quantity: u32,
    weight: Decimal,
    unit_cost: Decimal,
    material_buffer: Decimal,
    padded: bool,
    #[serde(default)]
    pre_padded: bool,
    volume: Decimal,
    packed: bool,
    position: Vec3,
    pack_dimensions: Vec3,
}

#[cfg(feature = "serde")]
impl TryFrom<ItemRepr> for Item {
    type Error = Error;

    fn try_from(repr: ItemRepr) -> Result<Self> {
        check_geometry(&repr.id, &repr.dimensions, repr.material_buffer)?;

        // An unpadded item may still carry the padded volume from before
        // its last unpad.
        let current = numeric::volume(&repr.dimensions)?;
        let volume_matches = repr.volume == current
            || (!repr.padded
                && repr.volume
                    == numeric::volume(&numeric::grow(&repr.dimensions, repr.material_buffer)?)?);
        if !volume_matches {
            return Err(Error::InvalidItem(format!(
                "Volume {} for '{}' does not match its dimensions",
                repr.volume, repr.id
            )));
        }

        Ok(Item {
            id: repr.id,
            dimensions: repr.dimensions,
            quantity: repr.quantity,
            weight: repr.weight,
            unit_cost: repr.unit_cost,
            material_buffer: repr.material_buffer,
            padded: repr.padded,
            pre_padded: repr.pre_padded,
            volume: repr.volume,
            packed: repr.packed,
            position: repr.position,
            pack_dimensions: repr.pack_dimensions,
        })
    }
}
