//! Stable constants shared across the crate.

/// Marker character that introduces a two-character placeholder token.
pub const MASK_MARKER: char = '?';

/// Punctuation characters that count toward the special class.
/// Excludes `?`, which is only special when escaped as `??`.
pub const SPECIAL_CHARS: &str = r##"!"#$%&'()*+,-./:;<=>@[\]^_`{|}~"##;

/// Sentinel for "no upper bound" on a policy dimension.
/// Compared by equality; other negative values are not sentinels.
pub const NO_MAX: i64 = -1;
