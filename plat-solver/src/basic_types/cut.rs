use std::fmt;

/// The orientation of a single straight cut through a parcel.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum CutOrientation {
    /// A top-to-bottom cut; the two children end up side by side. The cut
    /// line runs the full height of the parcel.
    Vertical,
    /// A left-to-right cut; the two children end up stacked. The cut line
    /// runs the full width of the parcel.
    Horizontal,
}

impl fmt::Display for CutOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CutOrientation::Vertical => write!(f, "vertical"),
            CutOrientation::Horizontal => write!(f, "horizontal"),
        }
    }
}

/// A single straight cut through a parcel: an orientation plus the distance
/// in metres of the cut line from the parcel's left edge (vertical cuts) or
/// top edge (horizontal cuts).
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Cut {
    pub orientation: CutOrientation,
    pub position: u32,
}

impl Cut {
    pub fn vertical(position: u32) -> Cut {
        Cut {
            orientation: CutOrientation::Vertical,
            position,
        }
    }

    pub fn horizontal(position: u32) -> Cut {
        Cut {
            orientation: CutOrientation::Horizontal,
            position,
        }
    }

    /// Whether the cut line lies strictly inside a parcel of the given
    /// dimensions. A 1x1 parcel admits no cut at all.
    pub fn is_valid_for(&self, width: u32, height: u32) -> bool {
        match self.orientation {
            CutOrientation::Vertical => (1..width).contains(&self.position),
            CutOrientation::Horizontal => (1..height).contains(&self.position),
        }
    }

    /// The dimensions of the two children produced by applying this cut to a
    /// parcel of the given dimensions, left (respectively top) child first.
    ///
    /// The children exactly tile the parent: a vertical cut at `s` yields
    /// `(s, h)` and `(w - s, h)`, a horizontal cut at `s` yields `(w, s)` and
    /// `(w, h - s)`.
    pub fn child_dimensions(&self, width: u32, height: u32) -> ((u32, u32), (u32, u32)) {
        match self.orientation {
            CutOrientation::Vertical => {
                ((self.position, height), (width - self.position, height))
            }
            CutOrientation::Horizontal => {
                ((width, self.position), (width, height - self.position))
            }
        }
    }

    /// All valid cuts of a parcel of the given dimensions, in canonical
    /// order: vertical cuts by increasing position, then horizontal cuts by
    /// increasing position.
    ///
    /// Candidate comparisons throughout the crate use strictly-greater
    /// tests, so this order (with the uncut parcel considered before any
    /// cut) is what makes tie-breaking deterministic.
    pub fn enumerate(width: u32, height: u32) -> impl Iterator<Item = Cut> {
        let vertical = (1..width).map(Cut::vertical);
        let horizontal = (1..height).map(Cut::horizontal);
        vertical.chain(horizontal)
    }
}

impl fmt::Display for Cut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} cut at {}m", self.orientation, self.position)
    }
}
