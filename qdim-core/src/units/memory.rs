//! Memory volume units, in binary multiples of the byte.

use crate::quantity::Simple;
use crate::scale::{Gibi, Kibi, Mebi, Tebi, Unity};
use qdim_derive::Dimension;

/// Dimension tag for memory volume.
#[derive(Dimension)]
#[dimension(id = 4, name = "memory volume")]
pub enum MemoryVolume {}

/// Bytes (base unit).
pub type Bytes = Simple<i64, Unity, MemoryVolume>;
/// Kilobytes, `1024` bytes.
pub type Kilobytes = Simple<i64, Kibi, MemoryVolume>;
/// Megabytes, `1024²` bytes.
pub type Megabytes = Simple<i64, Mebi, MemoryVolume>;
/// Gigabytes, `1024³` bytes.
pub type Gigabytes = Simple<i64, Gibi, MemoryVolume>;
/// Terabytes, `1024⁴` bytes.
pub type Terabytes = Simple<i64, Tebi, MemoryVolume>;
