#![allow(dead_code)]

use std::env;
use std::str::FromStr;
use std::sync::Mutex;

use rand::prelude::*;

/// Input patterns for testing and benchmarking. Values are u64.
///
/// The seed is picked once per process, or taken from the `OVERRIDE_SEED`
/// environment variable to reproduce a failure.

// --- Public ---

pub fn random(len: usize) -> Vec<u64> {
    //     .
    // : . : :
    // :.:::.::

    random_vec(len)
}

pub fn random_uniform<R>(len: usize, range: R) -> Vec<u64>
where
    R: Into<rand::distributions::Uniform<u64>>,
{
    // :.:.:.::
    let mut rng = new_seed();
    let dist: rand::distributions::Uniform<u64> = range.into();

    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

pub fn all_equal(len: usize) -> Vec<u64> {
    // ......
    // ::::::

    (0..len).map(|_| 66).collect::<Vec<_>>()
}

pub fn ascending(len: usize) -> Vec<u64> {
    //     .:
    //   .:::
    // .:::::

    (0..len as u64).collect::<Vec<_>>()
}

pub fn descending(len: usize) -> Vec<u64> {
    // :.
    // :::.
    // :::::.

    (0..len as u64).rev().collect::<Vec<_>>()
}

pub fn saw_ascending(len: usize, saw_count: usize) -> Vec<u64> {
    //   .:  .:
    // .:::.:::

    if len == 0 {
        return Vec::new();
    }

    let mut vals = random_vec(len);
    let chunks_size = (len / saw_count.max(1)).max(1);

    for chunk in vals.chunks_mut(chunks_size) {
        chunk.sort();
    }

    vals
}

pub fn saw_descending(len: usize, saw_count: usize) -> Vec<u64> {
    // :.  :.
    // :::.:::.

    if len == 0 {
        return Vec::new();
    }

    let mut vals = random_vec(len);
    let chunks_size = (len / saw_count.max(1)).max(1);

    for chunk in vals.chunks_mut(chunks_size) {
        chunk.sort_by_key(|&e| std::cmp::Reverse(e));
    }

    vals
}

pub fn pipe_organ(len: usize) -> Vec<u64> {
    //   .:.
    // .:::::.

    let mut vals = random_vec(len);

    let first_half = &mut vals[0..(len / 2)];
    first_half.sort();

    let second_half = &mut vals[(len / 2)..len];
    second_half.sort_by_key(|&e| std::cmp::Reverse(e));

    vals
}

/// Two sorted halves where every element of the first lies above every
/// element of the second.
pub fn descending_blocks(len: usize) -> Vec<u64> {
    //  .:
    // ::::.:
    // ::::::

    let half = len / 2;
    (half as u64..len as u64).chain(0..half as u64).collect()
}

pub fn random_init_seed() -> u64 {
    *SEED.lock().unwrap().get_or_insert_with(|| {
        env::var("OVERRIDE_SEED")
            .ok()
            .map(|seed| u64::from_str(&seed).unwrap())
            .unwrap_or_else(|| thread_rng().gen())
    })
}

// --- Private ---

static SEED: Mutex<Option<u64>> = Mutex::new(None);

fn new_seed() -> StdRng {
    // Random seed, but prints it for repeatability.
    StdRng::seed_from_u64(random_init_seed())
}

fn random_vec(len: usize) -> Vec<u64> {
    let mut rng = new_seed();

    (0..len).map(|_| rng.gen::<u64>()).collect()
}
