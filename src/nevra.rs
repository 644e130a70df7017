//! Package identity parsing and version ordering
//!
//! A package spec can name a package by plain name, by `name.arch` or by the
//! full `name-[epoch:]version-release.arch` form. Which parse applies comes
//! from the command alias that was invoked; with no explicit form the sack
//! tries the most specific form first.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// How a package spec string must be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NevraForm {
    /// Match by package name only.
    Name,
    /// Match by `name.arch`.
    NameArch,
    /// Match by full `name-[epoch:]version-release.arch`.
    Nevra,
}

/// Architectures recognized when splitting a trailing `.arch` component.
///
/// Keeps `python3.11` from being read as name `python3`, arch `11`.
pub const KNOWN_ARCHES: &[&str] = &[
    "x86_64", "aarch64", "i686", "noarch", "ppc64le", "s390x", "armv7hl", "riscv64", "src",
];

/// A fully qualified package identity. A missing epoch reads as 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nevra {
    pub name: String,
    #[serde(default)]
    pub epoch: u32,
    pub version: String,
    pub release: String,
    pub arch: String,
}

impl Nevra {
    /// Parse a `name-[epoch:]version-release.arch` string.
    ///
    /// The trailing component must be a known architecture; name, version
    /// and release must all be non-empty.
    pub fn parse(spec: &str) -> Option<Self> {
        let (rest, arch) = spec.rsplit_once('.')?;
        if !KNOWN_ARCHES.contains(&arch) {
            return None;
        }
        let (rest, release) = rest.rsplit_once('-')?;
        let (name, evr) = rest.rsplit_once('-')?;
        if name.is_empty() || release.is_empty() {
            return None;
        }
        let (epoch, version) = match evr.split_once(':') {
            Some((epoch, version)) => (epoch.parse().ok()?, version),
            None => (0, evr),
        };
        if version.is_empty() {
            return None;
        }
        Some(Self {
            name: name.to_string(),
            epoch,
            version: version.to_string(),
            release: release.to_string(),
            arch: arch.to_string(),
        })
    }
}

impl fmt::Display for Nevra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.epoch == 0 {
            write!(
                f,
                "{}-{}-{}.{}",
                self.name, self.version, self.release, self.arch
            )
        } else {
            write!(
                f,
                "{}-{}:{}-{}.{}",
                self.name, self.epoch, self.version, self.release, self.arch
            )
        }
    }
}

/// Split a `name.arch` spec. The suffix must be a known architecture.
pub fn split_name_arch(spec: &str) -> Option<(&str, &str)> {
    let (name, arch) = spec.rsplit_once('.')?;
    if name.is_empty() || !KNOWN_ARCHES.contains(&arch) {
        return None;
    }
    Some((name, arch))
}

/// Order two (epoch, version, release) triples, epoch first.
pub fn compare_evr(a: (u32, &str, &str), b: (u32, &str, &str)) -> Ordering {
    a.0.cmp(&b.0)
        .then_with(|| compare_version(a.1, b.1))
        .then_with(|| compare_version(a.2, b.2))
}

/// RPM-style version comparison.
///
/// Versions split into alternating numeric and alphabetic segments at
/// separator characters. Numeric segments compare as numbers and sort newer
/// than alphabetic ones; a longer segment list wins a common prefix.
pub fn compare_version(a: &str, b: &str) -> Ordering {
    let left = segments(a);
    let right = segments(b);
    for (x, y) in left.iter().zip(&right) {
        let ord = segment_cmp(x, y);
        if ord != Ordering::Equal {
            return ord;
        }
    }
    left.len().cmp(&right.len())
}

#[derive(Debug, PartialEq, Eq)]
enum Segment<'a> {
    Num(&'a str),
    Alpha(&'a str),
}

fn segment_cmp(x: &Segment<'_>, y: &Segment<'_>) -> Ordering {
    match (x, y) {
        (Segment::Num(a), Segment::Num(b)) => {
            let a = a.trim_start_matches('0');
            let b = b.trim_start_matches('0');
            a.len().cmp(&b.len()).then_with(|| a.cmp(b))
        }
        (Segment::Alpha(a), Segment::Alpha(b)) => a.cmp(b),
        (Segment::Num(_), Segment::Alpha(_)) => Ordering::Greater,
        (Segment::Alpha(_), Segment::Num(_)) => Ordering::Less,
    }
}

fn segments(s: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i].is_ascii_digit() {
            let start = i;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            out.push(Segment::Num(&s[start..i]));
        } else if bytes[i].is_ascii_alphabetic() {
            let start = i;
            while i < bytes.len() && bytes[i].is_ascii_alphabetic() {
                i += 1;
            }
            out.push(Segment::Alpha(&s[start..i]));
        } else {
            i += 1;
        }
    }
    out
}
