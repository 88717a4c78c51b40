//! Node identifiers and planar coordinates.

use std::{fmt, num::NonZeroUsize};

use rand::Rng;

/// Number of fractional digits used when rendering coordinates.
pub const COORDINATE_PRECISION: usize = 2;

/// 1-based node identifier as it appears in edge-list records.
///
/// Generation indexes nodes from zero; [`NodeId::from_index`] performs the
/// shift so the zero id can never be produced.
///
/// # Examples
/// ```
/// use graphgen_core::NodeId;
///
/// let id = NodeId::from_index(0);
/// assert_eq!(id.get(), 1);
/// assert_eq!(id.index(), 0);
/// assert!(NodeId::new(0).is_none());
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NodeId(NonZeroUsize);

impl NodeId {
    /// Wraps a 1-based id, returning `None` for zero.
    #[must_use]
    pub const fn new(id: usize) -> Option<Self> {
        match NonZeroUsize::new(id) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    /// Converts a zero-based generation index into its 1-based id.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self(NonZeroUsize::MIN.saturating_add(index))
    }

    /// Returns the 1-based id.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }

    /// Returns the zero-based index this id was generated from.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0.get().saturating_sub(1)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A point in the plane.
///
/// Displays as `x y` with [`COORDINATE_PRECISION`] fractional digits.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    /// Horizontal component.
    pub x: f64,
    /// Vertical component.
    pub y: f64,
}

impl Coordinate {
    /// Creates a coordinate from its components.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Draws `x` then `y`, each uniformly from `[0, extent)`.
    ///
    /// `extent` must be finite and positive; the builder guarantees this for
    /// every generator it produces.
    pub(crate) fn sample<R: Rng + ?Sized>(rng: &mut R, extent: f64) -> Self {
        let x = rng.gen_range(0.0..extent);
        let y = rng.gen_range(0.0..extent);
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    ///
    /// # Examples
    /// ```
    /// use graphgen_core::Coordinate;
    ///
    /// let origin = Coordinate::new(0.0, 0.0);
    /// assert_eq!(origin.distance_to(Coordinate::new(3.0, 4.0)), 5.0);
    /// ```
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "Euclidean distance requires floating-point arithmetic"
    )]
    pub fn distance_to(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.prec$} {:.prec$}",
            self.x,
            self.y,
            prec = COORDINATE_PRECISION
        )
    }
}

/// A generated node: its id and where it sits.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Node {
    /// 1-based identifier.
    pub id: NodeId,
    /// Position assigned at generation time.
    pub position: Coordinate,
}

impl Node {
    /// Creates a node.
    #[must_use]
    pub const fn new(id: NodeId, position: Coordinate) -> Self {
        Self { id, position }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.id, self.position)
    }
}
