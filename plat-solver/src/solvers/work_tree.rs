//! An arena-backed partition under construction, used by the methods which
//! explore many partitions in place rather than cloning trees.
use crate::basic_types::Cut;
use crate::basic_types::Money;
use crate::basic_types::Parcel;
use crate::basic_types::Subdivision;
use crate::containers::KeyedVec;
use crate::containers::StorageKey;
use crate::plat_assert_moderate;
use crate::plat_assert_simple;
use crate::pricing::Pricing;

/// Identifies a parcel in a [`WorkTree`].
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
#[repr(transparent)]
pub(crate) struct ParcelKey(u32);

impl StorageKey for ParcelKey {
    fn index(&self) -> usize {
        self.0 as usize
    }

    fn create_from_index(index: usize) -> Self {
        ParcelKey(index as u32)
    }
}

/// A parcel in the arena. Children are stored as keys rather than owned
/// boxes, so subdividing and clearing never reallocate existing parcels.
#[derive(Debug)]
struct WorkParcel {
    width: u32,
    height: u32,
    cut: Option<AppliedCut>,
}

#[derive(Clone, Copy, Debug)]
struct AppliedCut {
    cost: Money,
    left: ParcelKey,
    right: ParcelKey,
}

/// A mutable partition of one plot with its valuation maintained
/// incrementally: the total leaf benefit and total cut cost are updated in
/// O(1) on every [`WorkTree::subdivide`] and [`WorkTree::clear`], so reading
/// [`WorkTree::value`] after each step of an enumeration costs nothing.
///
/// The arena imposes a stack discipline which the enumeration respects by
/// construction: [`WorkTree::clear`] may only be called on the most recently
/// subdivided parcel, whose children then sit on top of the arena and whose
/// subtrees have already been cleared.
#[derive(Debug)]
pub(crate) struct WorkTree<'a> {
    pricing: &'a Pricing,
    nodes: KeyedVec<ParcelKey, WorkParcel>,
    benefit: Money,
    cost: Money,
}

impl<'a> WorkTree<'a> {
    /// Creates a tree holding the whole plot as its only parcel.
    ///
    /// The plot must be covered by the price table; then so is every parcel
    /// a sequence of cuts can create, which is what lets the valuation
    /// bookkeeping below look prices up infallibly.
    pub(crate) fn new(pricing: &'a Pricing, width: u32, height: u32) -> WorkTree<'a> {
        plat_assert_simple!(pricing.covers(width, height));

        let mut nodes: KeyedVec<ParcelKey, WorkParcel> = KeyedVec::default();
        let root = nodes.push(WorkParcel {
            width,
            height,
            cut: None,
        });
        plat_assert_moderate!(root.index() == 0);

        let mut tree = WorkTree {
            pricing,
            nodes,
            benefit: 0,
            cost: 0,
        };
        tree.benefit = tree.leaf_benefit(width, height);
        tree
    }

    pub(crate) fn root(&self) -> ParcelKey {
        ParcelKey(0)
    }

    pub(crate) fn dimensions(&self, key: ParcelKey) -> (u32, u32) {
        let parcel = &self.nodes[key];
        (parcel.width, parcel.height)
    }

    /// The net value of the current partition: total leaf benefit minus
    /// total cut cost.
    pub(crate) fn value(&self) -> Money {
        self.benefit - self.cost
    }

    /// Cuts the parcel `key` in two and returns the keys of its children.
    ///
    /// The parcel must currently be a leaf and the cut must fall strictly
    /// inside it.
    pub(crate) fn subdivide(&mut self, key: ParcelKey, cut: Cut) -> (ParcelKey, ParcelKey) {
        let (width, height) = self.dimensions(key);
        plat_assert_moderate!(self.nodes[key].cut.is_none());
        plat_assert_moderate!(cut.is_valid_for(width, height));

        let ((left_width, left_height), (right_width, right_height)) =
            cut.child_dimensions(width, height);
        let cost = self.pricing.cut_cost(cut.orientation, width, height);

        let left = self.nodes.push(WorkParcel {
            width: left_width,
            height: left_height,
            cut: None,
        });
        let right = self.nodes.push(WorkParcel {
            width: right_width,
            height: right_height,
            cut: None,
        });
        self.nodes[key].cut = Some(AppliedCut { cost, left, right });

        self.benefit += self.leaf_benefit(left_width, left_height)
            + self.leaf_benefit(right_width, right_height)
            - self.leaf_benefit(width, height);
        self.cost += cost;

        (left, right)
    }

    /// Undoes the most recent remaining [`WorkTree::subdivide`], making `key`
    /// a leaf again.
    pub(crate) fn clear(&mut self, key: ParcelKey) {
        let applied = self.nodes[key]
            .cut
            .take()
            .expect("only a subdivided parcel can be cleared");

        let (right_key, right) = self
            .nodes
            .pop()
            .expect("the arena holds the children of a subdivided parcel");
        let (left_key, left) = self
            .nodes
            .pop()
            .expect("the arena holds the children of a subdivided parcel");
        plat_assert_moderate!(left_key == applied.left && right_key == applied.right);
        plat_assert_moderate!(left.cut.is_none() && right.cut.is_none());

        let (width, height) = self.dimensions(key);
        self.benefit += self.leaf_benefit(width, height)
            - self.leaf_benefit(left.width, left.height)
            - self.leaf_benefit(right.width, right.height);
        self.cost -= applied.cost;
    }

    /// Deep-copies the subtree rooted at `key` into an owned [`Parcel`],
    /// leaving the arena untouched. Used to snapshot an incumbent before the
    /// enumeration mutates the partition further.
    pub(crate) fn extract(&self, key: ParcelKey) -> Parcel {
        let parcel = &self.nodes[key];
        let subdivision = parcel.cut.as_ref().map(|applied| Subdivision {
            cost: applied.cost,
            left: Box::new(self.extract(applied.left)),
            right: Box::new(self.extract(applied.right)),
        });
        Parcel::assemble(parcel.width, parcel.height, subdivision)
    }

    /// Visits every distinct partition of the subtree rooted at `key` exactly
    /// once, leaving the subtree as it found it.
    ///
    /// The parcel is first visited whole. Then, for every admissible cut in
    /// the deterministic candidate order, the parcel is subdivided and every
    /// partition of the left child is combined with every partition of the
    /// right child; the combination is what `visit` observes. Recursion on
    /// the right child is threaded through the continuation so that each
    /// combined state exists in the arena at the moment of the call.
    pub(crate) fn for_each_partition(
        &mut self,
        key: ParcelKey,
        visit: &mut dyn FnMut(&mut Self),
    ) {
        visit(self);

        let (width, height) = self.dimensions(key);
        for cut in Cut::enumerate(width, height) {
            let (left, right) = self.subdivide(key, cut);
            self.for_each_partition(left, &mut |tree: &mut Self| {
                tree.for_each_partition(right, &mut *visit);
            });
            self.clear(key);
        }
    }

    fn leaf_benefit(&self, width: u32, height: u32) -> Money {
        self.pricing
            .benefit(width, height)
            .expect("the price table covers every parcel below the root")
    }
}
