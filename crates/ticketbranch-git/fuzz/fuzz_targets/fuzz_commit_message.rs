// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for commit message parsing
//!
//! The parser is total: any text must parse, and the extracted body must
//! never contain blank lines.

#![no_main]

use libfuzzer_sys::fuzz_target;

use ticketbranch_git::parse_commit_message;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let parsed = parse_commit_message(input);
        if !parsed.message.is_empty() {
            assert!(parsed.message.split('\n').all(|l| !l.trim_end().is_empty()));
        }
        assert!(parsed.issues.iter().all(|issue| issue.starts_with('#')));
    }
});
