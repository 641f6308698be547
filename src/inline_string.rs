// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Stack-allocated string storage for rendered color strings.

use smallstr::SmallString;

/// Rendered color strings fit inline at the default precision; longer
/// renderings spill to the heap transparently.
pub const INLINE_STRING_SIZE: usize = 32;

pub type InlineString = SmallString<[u8; INLINE_STRING_SIZE]>;
