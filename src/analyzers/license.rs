//! License detection against a known fingerprint set
//!
//! Candidate files (LICENSE/COPYING variants at the root and first
//! subdirectory level) are matched against per-license key phrases on
//! normalized content: lowercased, whitespace collapsed. Confidence is the
//! fraction of a fingerprint's phrases found in the content; 1.0 means every
//! phrase matched. Matches below [`CONFIDENCE_THRESHOLD`] are discarded. The
//! highest-confidence match wins, ties resolved by the path closest to the
//! root. No match is not an error.

use crate::error::{Warning, WarningKind};
use crate::models::{FileDescriptor, LicenseInfo};
use std::path::Path;

/// Minimum confidence for a fingerprint match to count
pub const CONFIDENCE_THRESHOLD: f64 = 0.5;

/// A license fingerprint: an SPDX identifier with its key phrases
struct Fingerprint {
    identifier: &'static str,
    phrases: &'static [&'static str],
}

/// Known fingerprints, checked in order
const FINGERPRINTS: &[Fingerprint] = &[
    Fingerprint {
        identifier: "MIT",
        phrases: &[
            "mit license",
            "permission is hereby granted, free of charge",
            "the software is provided \"as is\"",
        ],
    },
    Fingerprint {
        identifier: "Apache-2.0",
        phrases: &[
            "apache license",
            "version 2.0",
            "http://www.apache.org/licenses/",
        ],
    },
    Fingerprint {
        identifier: "GPL-3.0-only",
        phrases: &[
            "gnu general public license",
            "version 3",
            "free software foundation",
        ],
    },
    Fingerprint {
        identifier: "BSD-3-Clause",
        phrases: &[
            "redistribution and use in source and binary forms",
            "neither the name of",
        ],
    },
    Fingerprint {
        identifier: "MPL-2.0",
        phrases: &["mozilla public license", "source code form"],
    },
    Fingerprint {
        identifier: "ISC",
        phrases: &[
            "isc license",
            "permission to use, copy, modify, and/or distribute",
        ],
    },
    Fingerprint {
        identifier: "Unlicense",
        phrases: &["this is free and unencumbered software released into the public domain"],
    },
];

/// Detector for the project license
pub struct LicenseDetector;

impl LicenseDetector {
    /// Check whether a descriptor is a license candidate
    ///
    /// Candidates live at the root level or one directory below it and carry
    /// a conventional license file name.
    pub fn is_candidate(descriptor: &FileDescriptor) -> bool {
        if descriptor.depth > 2 {
            return false;
        }
        let name = descriptor.file_name().to_ascii_uppercase();
        name.starts_with("LICENSE")
            || name.starts_with("LICENCE")
            || name.starts_with("COPYING")
            || name == "UNLICENSE"
    }

    /// Normalize content for matching: lowercase, whitespace collapsed
    pub fn normalize(content: &str) -> String {
        content
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Match normalized content against the fingerprint set
    ///
    /// Returns the best (identifier, confidence) at or above the threshold.
    pub fn match_content(content: &str) -> Option<(String, f64)> {
        let normalized = Self::normalize(content);

        let mut best: Option<(String, f64)> = None;
        for fingerprint in FINGERPRINTS {
            let matched = fingerprint
                .phrases
                .iter()
                .filter(|phrase| normalized.contains(*phrase))
                .count();
            let confidence = matched as f64 / fingerprint.phrases.len() as f64;

            if confidence < CONFIDENCE_THRESHOLD {
                continue;
            }
            // Earlier fingerprints win ties, keeping the result stable
            if best.as_ref().map_or(true, |(_, c)| confidence > *c) {
                best = Some((fingerprint.identifier.to_string(), confidence));
            }
        }
        best
    }

    /// Detect the project license from the walked descriptor stream
    ///
    /// Reads candidate files fresh (they are small and few); read failures
    /// become skip warnings. At most one LicenseInfo is produced per run.
    pub fn detect(
        root: &Path,
        files: &[FileDescriptor],
        warnings: &mut Vec<Warning>,
    ) -> Option<LicenseInfo> {
        let mut best: Option<LicenseInfo> = None;

        for descriptor in files.iter().filter(|fd| Self::is_candidate(fd)) {
            let content = match std::fs::read_to_string(root.join(&descriptor.path)) {
                Ok(content) => content,
                Err(err) => {
                    warnings.push(Warning::new(
                        descriptor.path.clone(),
                        WarningKind::Unreadable,
                        format!("could not read license candidate: {}", err),
                    ));
                    continue;
                }
            };

            let Some((identifier, confidence)) = Self::match_content(&content) else {
                continue;
            };

            let candidate = LicenseInfo {
                identifier,
                path: descriptor.path.clone(),
                confidence,
            };

            let better = match &best {
                None => true,
                Some(current) => {
                    confidence > current.confidence
                        || (confidence == current.confidence
                            && shorter_path(&candidate.path, &current.path))
                }
            };
            if better {
                best = Some(candidate);
            }
        }

        best
    }
}

/// Compare candidate paths: fewer components first, then lexicographic
fn shorter_path(a: &Path, b: &Path) -> bool {
    let a_len = a.components().count();
    let b_len = b.components().count();
    a_len < b_len || (a_len == b_len && a < b)
}
