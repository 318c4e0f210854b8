//! Cache file naming and directory resolution.

use std::path::PathBuf;

use crate::CacheError;

/// Bit population of a suit axis (two suits of thirteen cards).
pub const SUIT_ONE_BITS: u32 = 26;

/// Bit population of a value axis (seven values across four suits).
pub const VALUE_ONE_BITS: u32 = 28;

/// Environment variable naming the cache directory.
const DBN_PATH_VAR: &str = "DBNPATH";

/// File name for an enumeration: `dbn_<bits>_<ones>[_short].bin`. The
/// `_short` suffix marks a strict enumeration with no all-zero or all-one
/// windows; `ones == 0` means the population was unconstrained.
pub fn cache_file_name(sequence_bits: u32, one_bits: u32, strict: bool) -> String {
    let suffix = if strict { "_short" } else { "" };
    format!("dbn_{sequence_bits}_{one_bits}{suffix}.bin")
}

/// Resolved cache directory holding the primitive sequence files.
#[derive(Debug, Clone)]
pub struct CachePaths {
    root: PathBuf,
}

impl CachePaths {
    /// Reads the cache directory from the `DBNPATH` environment variable.
    pub fn from_env() -> Result<CachePaths, CacheError> {
        match std::env::var_os(DBN_PATH_VAR) {
            Some(dir) if !dir.is_empty() => Ok(CachePaths { root: dir.into() }),
            _ => Err(CacheError::MissingEnvVar(DBN_PATH_VAR)),
        }
    }

    pub fn at(root: impl Into<PathBuf>) -> CachePaths {
        CachePaths { root: root.into() }
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    /// Path of the 52-bit suit-axis file (population 26).
    pub fn suit_file(&self, strict: bool) -> PathBuf {
        self.root.join(cache_file_name(52, SUIT_ONE_BITS, strict))
    }

    /// Path of the 52-bit value-axis file (population 28).
    pub fn value_file(&self, strict: bool) -> PathBuf {
        self.root.join(cache_file_name(52, VALUE_ONE_BITS, strict))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_follow_the_convention() {
        assert_eq!(cache_file_name(52, 26, false), "dbn_52_26.bin");
        assert_eq!(cache_file_name(52, 28, true), "dbn_52_28_short.bin");
        assert_eq!(cache_file_name(52, 0, false), "dbn_52_0.bin");
    }

    #[test]
    fn paths_resolve_under_the_root() {
        let paths = CachePaths::at("/data/dbn");
        assert_eq!(
            paths.suit_file(false),
            PathBuf::from("/data/dbn/dbn_52_26.bin")
        );
        assert_eq!(
            paths.value_file(true),
            PathBuf::from("/data/dbn/dbn_52_28_short.bin")
        );
    }
}
