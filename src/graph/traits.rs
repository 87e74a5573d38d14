use std::fmt::Debug;
use num_traits::{CheckedAdd, Zero};
use ordered_float::OrderedFloat;

/// Numeric type usable as an edge weight or detour cost.
///
/// Totally ordered so it can key a heap. Sums are checked: a total that the
/// type cannot represent is reported as `None` instead of wrapping.
pub trait Weight: Copy + Debug + Ord + Zero {
    /// Sum of two weights, `None` when it does not fit the type
    fn checked_sum(self, other: Self) -> Option<Self>;
}

macro_rules! integer_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn checked_sum(self, other: Self) -> Option<Self> {
                    CheckedAdd::checked_add(&self, &other)
                }
            }
        )*
    };
}

integer_weight!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl Weight for OrderedFloat<f64> {
    fn checked_sum(self, other: Self) -> Option<Self> {
        let sum = self + other;
        sum.0.is_finite().then_some(sum)
    }
}

impl Weight for OrderedFloat<f32> {
    fn checked_sum(self, other: Self) -> Option<Self> {
        let sum = self + other;
        sum.0.is_finite().then_some(sum)
    }
}

/// Trait representing a weighted directed graph
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a vertex
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.outgoing_edges(from).any(|(target, _)| target == to)
    }

    /// Gets the weight of the cheapest edge between two vertices, if any
    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.outgoing_edges(from)
            .filter(|(target, _)| *target == to)
            .map(|(_, weight)| weight)
            .min()
    }
}
