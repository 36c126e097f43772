// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Per-search mutable state that is not part of the trail.

pub mod statistics;
