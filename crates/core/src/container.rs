//! Containers (receptacles) that items are packed into.

use crate::identity::ContainerShape;
use crate::numeric::{self, vec3, Vec3};
use crate::{Error, Result};
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A box-shaped container.
///
/// Only the envelope (length, width, height) takes part in shape identity;
/// the ID and weight limit are administrative.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "ContainerRepr"))]
pub struct Container {
    /// Caller-assigned identifier (SKU, box code, ...).
    id: String,

    /// Dimensions (length, width, height).
    dimensions: Vec3,

    /// Maximum total weight allowed.
    max_weight: Option<Decimal>,
}

impl Container {
    /// Creates a container, rejecting non-positive dimensions.
    pub fn new(
        id: impl Into<String>,
        length: Decimal,
        width: Decimal,
        height: Decimal,
    ) -> Result<Self> {
        let container = Self {
            id: id.into(),
            dimensions: vec3(length, width, height),
            max_weight: None,
        };
        container.validate()?;
        Ok(container)
    }

    /// Sets the maximum allowed weight.
    pub fn with_max_weight(mut self, weight: Decimal) -> Result<Self> {
        self.max_weight = Some(weight);
        self.validate()?;
        Ok(self)
    }

    /// Checks that the envelope and weight limit are positive.
    pub fn validate(&self) -> Result<()> {
        if self.dimensions.iter().any(|d| *d <= Decimal::ZERO) {
            return Err(Error::InvalidContainer(format!(
                "All dimensions for '{}' must be positive",
                self.id
            )));
        }

        if let Some(weight) = self.max_weight {
            if weight <= Decimal::ZERO {
                return Err(Error::InvalidContainer(format!(
                    "Maximum weight for '{}' must be positive",
                    self.id
                )));
            }
        }

        Ok(())
    }

    /// Returns the container ID.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the dimensions (length, width, height).
    pub fn dimensions(&self) -> &Vec3 {
        &self.dimensions
    }

    /// Returns the length.
    pub fn length(&self) -> Decimal {
        self.dimensions.x
    }

    /// Returns the width.
    pub fn width(&self) -> Decimal {
        self.dimensions.y
    }

    /// Returns the height.
    pub fn height(&self) -> Decimal {
        self.dimensions.z
    }

    /// Returns the maximum weight.
    pub fn max_weight(&self) -> Option<Decimal> {
        self.max_weight
    }

    /// Envelope volume.
    pub fn volume(&self) -> Result<Decimal> {
        numeric::volume(&self.dimensions)
    }

    /// The shape key used for identity and deduplication.
    pub fn shape(&self) -> ContainerShape {
        ContainerShape {
            length: self.length(),
            width: self.width(),
            height: self.height(),
        }
    }
}

/// Wire form of [`Container`], validated before it becomes one.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct ContainerRepr {
    id: String,
    dimensions: Vec3,
    #[serde(default)]
    max_weight: Option<Decimal>,
}

#[cfg(feature = "serde")]
impl TryFrom<ContainerRepr> for Container {
    type Error = Error;

    fn try_from(repr: ContainerRepr) -> Result<Self> {
        let container = Self {
            id: repr.id,
            dimensions: repr.dimensions,
            max_weight: repr.max_weight,
        };
        container.validate()?;
        Ok(container)
    }
}
