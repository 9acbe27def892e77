/// Sample time
pub const T: &str = "t";
/// Horizontal position
pub const X: &str = "x";
/// Vertical position
pub const Y: &str = "y";
/// Horizontal momentum
pub const PX: &str = "px";
/// Vertical momentum
pub const PY: &str = "py";

/// All trajectory columns in storage order
pub const ALL: [&str; 5] = [T, X, Y, PX, PY];
