// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for issue/branch name conversion

#![no_main]

use libfuzzer_sys::fuzz_target;

use ticketbranch_git::{create_branch_name, issue_from_branch_name};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if let Ok(branch) = create_branch_name(input) {
            // A name we produced must always yield its issue back.
            assert!(issue_from_branch_name(&branch).is_ok());
        }
        let _ = issue_from_branch_name(input);
    }
});
