use std::fmt::Write;

use crate::basic_types::Cut;
use crate::basic_types::Money;
use crate::basic_types::SubdivisionError;
use crate::plat_assert_moderate;
use crate::pricing::Pricing;

/// A rectangular piece of land of integer metre dimensions, either left
/// whole or subdivided into two children by a single [`Cut`].
///
/// A parcel is a tree by construction: a subdivided parcel exclusively owns
/// its two children, and the children exactly tile the parent. The
/// subdivision is one optional field, so "both children or none" cannot be
/// violated. A whole parcel carries no cut cost.
///
/// The lifecycle is mutable: [`Parcel::subdivide`] attaches two fresh whole
/// children and records the cost of the cut, [`Parcel::clear`] detaches them
/// again. Candidate partitions that must survive further mutation are
/// preserved with [`Clone`], which deep-copies the whole tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Parcel {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) subdivision: Option<Subdivision>,
}

/// The result of cutting a [`Parcel`]: the cost charged for that cut and the
/// two children tiling the parent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Subdivision {
    pub(crate) cost: Money,
    pub(crate) left: Box<Parcel>,
    pub(crate) right: Box<Parcel>,
}

impl Subdivision {
    /// The cost charged for this cut alone, excluding cuts further down.
    pub fn cost(&self) -> Money {
        self.cost
    }

    /// The left (vertical cut) or top (horizontal cut) child.
    pub fn left(&self) -> &Parcel {
        &self.left
    }

    /// The right (vertical cut) or bottom (horizontal cut) child.
    pub fn right(&self) -> &Parcel {
        &self.right
    }

    /// Mutable access to the left child, for subdividing it in turn.
    pub fn left_mut(&mut self) -> &mut Parcel {
        &mut self.left
    }

    /// Mutable access to the right child, for subdividing it in turn.
    pub fn right_mut(&mut self) -> &mut Parcel {
        &mut self.right
    }
}

impl Parcel {
    /// Creates a whole parcel of the given dimensions.
    pub fn new(width: u32, height: u32) -> Result<Parcel, SubdivisionError> {
        if width == 0 || height == 0 {
            return Err(SubdivisionError::EmptyPlot { width, height });
        }
        Ok(Parcel {
            width,
            height,
            subdivision: None,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The area in square metres.
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Whether the parcel is currently undivided.
    pub fn is_whole(&self) -> bool {
        self.subdivision.is_none()
    }

    pub fn subdivision(&self) -> Option<&Subdivision> {
        self.subdivision.as_ref()
    }

    /// Mutable access to the subdivision, for building deeper trees by hand.
    pub fn subdivision_mut(&mut self) -> Option<&mut Subdivision> {
        self.subdivision.as_mut()
    }

    /// Cuts this parcel in two, attaching two fresh whole children and
    /// recording the cost of the cut as charged by `pricing`.
    ///
    /// An existing subdivision is replaced wholesale, children and all.
    ///
    /// # Errors
    /// [`SubdivisionError::InvalidCut`] if the cut line does not lie strictly
    /// inside the parcel; solvers derive their cut positions from the current
    /// dimensions and never trip this.
    pub fn subdivide(&mut self, cut: Cut, pricing: &Pricing) -> Result<(), SubdivisionError> {
        if !cut.is_valid_for(self.width, self.height) {
            return Err(SubdivisionError::InvalidCut {
                width: self.width,
                height: self.height,
                orientation: cut.orientation,
                position: cut.position,
            });
        }
        let ((left_width, left_height), (right_width, right_height)) =
            cut.child_dimensions(self.width, self.height);
        self.subdivision = Some(Subdivision {
            cost: pricing.cut_cost(cut.orientation, self.width, self.height),
            left: Box::new(Parcel {
                width: left_width,
                height: left_height,
                subdivision: None,
            }),
            right: Box::new(Parcel {
                width: right_width,
                height: right_height,
                subdivision: None,
            }),
        });
        Ok(())
    }

    /// Undoes [`Parcel::subdivide`]: detaches the children (and everything
    /// below them) and restores the parcel to a whole one with cost 0.
    pub fn clear(&mut self) {
        self.subdivision = None;
    }

    /// The total sale benefit of the parcel: the price-table entry if it is
    /// whole, otherwise the sum over its children.
    ///
    /// # Errors
    /// [`SubdivisionError::MissingPrice`] if some leaf's size has no entry in
    /// the price table.
    pub fn benefit(&self, pricing: &Pricing) -> Result<Money, SubdivisionError> {
        match &self.subdivision {
            None => pricing.benefit(self.width, self.height),
            Some(subdivision) => {
                Ok(subdivision.left.benefit(pricing)? + subdivision.right.benefit(pricing)?)
            }
        }
    }

    /// The total cost of every cut in the tree. A whole parcel costs 0.
    pub fn cost(&self) -> Money {
        match &self.subdivision {
            None => 0,
            Some(subdivision) => {
                subdivision.cost + subdivision.left.cost() + subdivision.right.cost()
            }
        }
    }

    /// The net value: [`Parcel::benefit`] minus [`Parcel::cost`]. This is the
    /// quantity the solvers maximise; partitions of equal value carry no
    /// preference.
    pub fn value(&self, pricing: &Pricing) -> Result<Money, SubdivisionError> {
        Ok(self.benefit(pricing)? - self.cost())
    }

    /// Renders a recursive summary of the tree, one line per parcel in
    /// pre-order, each line reading
    /// `<width>m x <height>m, benefit <B>, cost <C>, value <V>` with the
    /// path from the root accumulated as `LEFT: `/`RIGHT: ` prefixes.
    pub fn describe(&self, pricing: &Pricing) -> Result<String, SubdivisionError> {
        let mut output = String::new();
        self.describe_into(&mut output, "", pricing)?;
        Ok(output)
    }

    fn describe_into(
        &self,
        output: &mut String,
        prefix: &str,
        pricing: &Pricing,
    ) -> Result<(), SubdivisionError> {
        let benefit = self.benefit(pricing)?;
        let cost = self.cost();
        let _ = writeln!(
            output,
            "{prefix}{}m x {}m, benefit {benefit}, cost {cost}, value {}",
            self.width,
            self.height,
            benefit - cost,
        );
        if let Some(subdivision) = &self.subdivision {
            subdivision
                .left
                .describe_into(output, &format!("{prefix}LEFT: "), pricing)?;
            subdivision
                .right
                .describe_into(output, &format!("{prefix}RIGHT: "), pricing)?;
        }
        Ok(())
    }

    /// Builds a parcel from parts already known to be consistent; used when
    /// materialising search results.
    pub(crate) fn assemble(width: u32, height: u32, subdivision: Option<Subdivision>) -> Parcel {
        plat_assert_moderate!(width >= 1 && height >= 1);
        if let Some(subdivision) = &subdivision {
            plat_assert_moderate!(
                subdivision.left.area() + subdivision.right.area()
                    == u64::from(width) * u64::from(height)
            );
        }
        Parcel {
            width,
            height,
            subdivision,
        }
    }
}
