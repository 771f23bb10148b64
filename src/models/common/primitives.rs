/// Represents a distance in kilometers.
pub type Distance = f64;

/// Represents a duration in minutes.
pub type Duration = f64;

/// Represents a timestamp in milliseconds.
pub type Timestamp = f64;

/// Specifies a monetary cost value.
pub type Cost = f64;
