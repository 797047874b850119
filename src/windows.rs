//! Windows version and architecture detection from free-form descriptions.

use std::sync::LazyLock;

use crate::aliases::{AliasTable, TieredAliases};

pub const SUPPORTED_WINDOWS_VERSIONS: &[&str] = &[
    "w11", "w10", "w8", "w7", "2k19", "2k12", "2k16", "2k22", "2k25", "2k3", "2k8", "xp",
    "2k12r2", "2k8r2", "w8.1",
];

pub const SUPPORTED_WINDOWS_ARCHITECTURES: &[&str] = &["amd64", "ARM64", "x86"];

type AliasGroups = &'static [(&'static str, &'static [&'static str])];

// Tags whose patterns also satisfy a shorter base-version pattern.
const VERSION_VARIANTS: AliasGroups = &[
    ("2k12r2", &["2k12r2", "w2k12r2", "win2k12r2", "windows.?server.?2012?.r2"]),
    ("2k8r2", &["2k8r2", "w2k8r2", "win2k8r2", "windows.?server.?2008?.r2"]),
    ("w8.1", &["w8.1", "win8.1", "windows.?8.1"]),
];

const VERSIONS: AliasGroups = &[
    ("w11", &["w11", "win11", "windows.?11"]),
    ("w10", &["w10", "win10", "windows.?10"]),
    ("w8", &["w8", "win8", "windows.?8"]),
    ("w7", &["w7", "win7", "windows.?7"]),
    ("2k19", &["2k19", "w2k19", "win2k19", "windows.?server.?2019"]),
    ("2k12", &["2k12", "w2k12", "win2k12", "windows.?server.?2012"]),
    ("2k16", &["2k16", "w2k16", "win2k16", "windows.?server.?2016"]),
    ("2k22", &["2k22", "w2k22", "win2k22", "windows.?server.?2022"]),
    ("2k25", &["2k25", "w2k25", "win2k25", "windows.?server.?2025"]),
    ("2k3", &["2k3", "w2k3", "win2k3", "windows.?server.?2003"]),
    ("2k8", &["2k8", "w2k8", "win2k8", "windows.?server.?2008"]),
    ("xp", &["xp", "wxp", "winxp", "windows.?xp"]),
];

const ARCHITECTURES_64: AliasGroups = &[
    ("amd64", &["amd64", "x64", "x86_64"]),
    ("ARM64", &["arm64", "aarch64"]),
];

const ARCHITECTURES_32: AliasGroups = &[("x86", &["x86_32", "x86"])];

static VERSION_ALIASES: LazyLock<TieredAliases> =
    LazyLock::new(|| tiered(&[VERSION_VARIANTS, VERSIONS]));

static ARCHITECTURE_ALIASES: LazyLock<TieredAliases> =
    LazyLock::new(|| tiered(&[ARCHITECTURES_64, ARCHITECTURES_32]));

fn tiered(tiers: &[AliasGroups]) -> TieredAliases {
    // The tables above are constants; a compile failure is a programmer error.
    TieredAliases::new(
        tiers
            .iter()
            .map(|groups| AliasTable::new(groups).expect("static alias pattern must compile"))
            .collect(),
    )
}

/// Returns the canonical version tag for `desc`, or `""` if none matches.
pub fn detect_windows_version(desc: &str) -> &'static str {
    canonical(VERSION_ALIASES.match_str(desc), SUPPORTED_WINDOWS_VERSIONS)
}

/// Returns the canonical architecture tag for `desc`, or `""` if none matches.
pub fn detect_windows_architecture(desc: &str) -> &'static str {
    canonical(ARCHITECTURE_ALIASES.match_str(desc), SUPPORTED_WINDOWS_ARCHITECTURES)
}

pub fn is_supported_version(tag: &str) -> bool {
    SUPPORTED_WINDOWS_VERSIONS.contains(&tag)
}

pub fn is_supported_architecture(tag: &str) -> bool {
    SUPPORTED_WINDOWS_ARCHITECTURES.contains(&tag)
}

// Maps a matched tag back to its 'static entry in the vocabulary.
fn canonical(tag: Option<&str>, vocabulary: &'static [&'static str]) -> &'static str {
    tag.and_then(|tag| vocabulary.iter().copied().find(|v| *v == tag))
        .unwrap_or("")
}
