#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (&[u8], usize)| {
    // Key in the high byte, input position below it, so ties are visible.
    let mut arr: Vec<u64> = data
        .0
        .chunks_exact(2)
        .enumerate()
        .map(|(i, c)| ((c[1] as u64) << 56) | ((c[0] as u64) << 32) | i as u64)
        .collect();
    let mut arr2 = arr.clone();
    let mut arr3 = arr.clone();

    let mut num_cmp = 0usize;
    paritysort::sort_by(&mut arr, |a, b| {
        num_cmp += 1;
        (a >> 56).cmp(&(b >> 56))
    });
    arr2.sort_by(|a, b| (a >> 56).cmp(&(b >> 56)));
    assert_eq!(arr, arr2);

    // An inconsistent comparator may scramble the order, never the contents.
    let mut state = data.1 as u64 | 1;
    paritysort::sort_by(&mut arr3, |_, _| {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        (state % 3).cmp(&1)
    });
    arr3.sort();
    arr2.sort();
    assert_eq!(arr3, arr2);
    assert!(num_cmp <= arr.len().max(1) * 64);
});
