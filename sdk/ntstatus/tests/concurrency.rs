//! Shared use of the process-wide registry from several threads.
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!
use std::{sync::Barrier, thread};

use ntstatus::{by_name, by_value, describe, registry};

const THREADS: usize = 16;

#[test]
fn first_use_from_many_threads_builds_one_registry() {
    let barrier = Barrier::new(THREADS);
    let addresses: Vec<usize> = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                scope.spawn(|| {
                    barrier.wait();
                    registry() as *const _ as usize
                })
            })
            .collect();
        handles.into_iter().map(|handle| handle.join().unwrap()).collect()
    });
    assert!(addresses.windows(2).all(|pair| pair[0] == pair[1]));
}

#[test]
fn concurrent_lookups_agree() {
    let symbols: Vec<&'static str> = registry().all_status_codes().map(|(symbol, _)| symbol).collect();

    let results: Vec<Vec<(Option<u32>, usize, String)>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                scope.spawn(|| {
                    symbols
                        .iter()
                        .map(|symbol| {
                            let value = by_name(symbol);
                            let aliases = value.map(|value| by_value(value).len()).unwrap_or_default();
                            let text = value.map(|value| describe(value).to_string()).unwrap_or_default();
                            (value, aliases, text)
                        })
                        .collect()
                })
            })
            .collect();
        handles.into_iter().map(|handle| handle.join().unwrap()).collect()
    });

    assert!(results.windows(2).all(|pair| pair[0] == pair[1]));
    assert!(results[0].iter().all(|(value, aliases, _)| value.is_some() && *aliases >= 1));
}
