//! Integration test verifying that the transforms run without touching the heap.

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;

use ctfft::options::{BitReverseAlgorithm, Options};
use ctfft::{fft, fft_32, fft_64_with_opts};
use num_complex::Complex;

struct CountingAllocator;

thread_local! {
    static COUNTING: Cell<bool> = const { Cell::new(false) };
    static ALLOCATED: Cell<usize> = const { Cell::new(0) };
}

fn record(size: usize) {
    let _ = COUNTING.try_with(|counting| {
        if counting.get() {
            let _ = ALLOCATED.try_with(|bytes| bytes.set(bytes.get() + size));
        }
    });
}

unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        record(layout.size());
        System.alloc(layout)
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        record(layout.size());
        System.alloc_zeroed(layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        record(new_size);
        System.realloc(ptr, layout, new_size)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }
}

#[global_allocator]
static GLOBAL: CountingAllocator = CountingAllocator;

/// Bytes allocated on this thread while running `f`.
fn allocated_during(f: impl FnOnce()) -> usize {
    ALLOCATED.with(|bytes| bytes.set(0));
    COUNTING.with(|counting| counting.set(true));
    f();
    COUNTING.with(|counting| counting.set(false));
    ALLOCATED.with(|bytes| bytes.get())
}

#[test]
fn transforms_do_not_allocate() {
    let big_n = 1 << 16;
    let mut reals_32: Vec<f32> = (0..big_n).map(|i| (i % 7) as f32).collect();
    let mut imags_32 = vec![0.0f32; big_n];
    let mut reals_64: Vec<f64> = (0..big_n).map(|i| (i % 5) as f64).collect();
    let mut imags_64 = vec![0.0f64; big_n];
    let mut signal: Vec<Complex<f32>> = (0..big_n)
        .map(|i| Complex::new((i % 3) as f32, 1.0))
        .collect();
    let mask_walk = Options::with_bit_reverse(BitReverseAlgorithm::MaskWalk);

    // first calls register the logging callsites
    fft_32(&mut reals_32, &mut imags_32).unwrap();
    fft_64_with_opts(&mut reals_64, &mut imags_64, &mask_walk).unwrap();
    fft(&mut signal).unwrap();

    let bytes = allocated_during(|| {
        fft_32(&mut reals_32, &mut imags_32).unwrap();
        fft_64_with_opts(&mut reals_64, &mut imags_64, &mask_walk).unwrap();
        fft(&mut signal).unwrap();
    });
    assert_eq!(bytes, 0, "allocated {bytes} bytes during the transforms");
}
