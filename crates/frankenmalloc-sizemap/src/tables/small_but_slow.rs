//! Compiled-in size classes for 4 KiB pages.

use crate::size_class_info::SizeClassInfo;

/// Production table.
#[rustfmt::skip]
pub(super) static SIZE_CLASSES: [SizeClassInfo; 46] = [
    // <bytes>, <pages>, <batch size>    <tail waste>
    SizeClassInfo::new(      0,   0,   0), // sentinel
    SizeClassInfo::new(      8,   1,  32), // 0.00%
    SizeClassInfo::new(     16,   1,  32), // 0.00%
    SizeClassInfo::new(     24,   1,  32), // 0.39%
    SizeClassInfo::new(     32,   1,  32), // 0.00%
    SizeClassInfo::new(     40,   1,  32), // 0.39%
    SizeClassInfo::new(     48,   1,  32), // 0.39%
    SizeClassInfo::new(     56,   1,  32), // 0.20%
    SizeClassInfo::new(     64,   1,  32), // 0.00%
    SizeClassInfo::new(     72,   1,  32), // 1.56%
    SizeClassInfo::new(     80,   1,  32), // 0.39%
    SizeClassInfo::new(     88,   1,  32), // 1.17%
    SizeClassInfo::new(     96,   1,  32), // 1.56%
    SizeClassInfo::new(    104,   1,  32), // 0.98%
    SizeClassInfo::new(    112,   1,  32), // 1.56%
    SizeClassInfo::new(    120,   1,  32), // 0.39%
    SizeClassInfo::new(    128,   1,  32), // 0.00%
    SizeClassInfo::new(    144,   1,  32), // 1.56%
    SizeClassInfo::new(    168,   1,  32), // 1.56%
    SizeClassInfo::new(    192,   1,  32), // 1.56%
    SizeClassInfo::new(    216,   1,  32), // 5.08%
    SizeClassInfo::new(    248,   1,  32), // 3.12%
    SizeClassInfo::new(    280,   1,  32), // 4.30%
    SizeClassInfo::new(    320,   1,  32), // 6.25%
    SizeClassInfo::new(    360,   1,  32), // 3.32%
    SizeClassInfo::new(    408,   1,  32), // 0.39%
    SizeClassInfo::new(    464,   1,  32), // 9.38%
    SizeClassInfo::new(    576,   1,  32), // 1.56%
    SizeClassInfo::new(    704,   2,  32), // 5.47%
    SizeClassInfo::new(    832,   2,  32), // 8.59%
    SizeClassInfo::new(    960,   1,  32), // 6.25%
    SizeClassInfo::new(   1152,   2,  32), // 1.56%
    SizeClassInfo::new(   1408,   3,  32), // 8.33%
    SizeClassInfo::new(   1664,   3,  32), // 5.21%
    SizeClassInfo::new(   1920,   1,  32), // 6.25%
    SizeClassInfo::new(   2176,   3,  30), // 11.46%
    SizeClassInfo::new(   2560,   2,  25), // 6.25%
    SizeClassInfo::new(   2944,   3,  22), // 4.17%
    SizeClassInfo::new(   3328,   5,  19), // 2.50%
    SizeClassInfo::new(   3840,   1,  17), // 6.25%
    SizeClassInfo::new(   4352,   6,  15), // 11.46%
    SizeClassInfo::new(   4992,   4,  13), // 8.59%
    SizeClassInfo::new(   5632,   3,  11), // 8.33%
    SizeClassInfo::new(   6400,   5,  10), // 6.25%
    SizeClassInfo::new(   7296,   2,   8), // 10.94%
    SizeClassInfo::new(   8192,   2,   8), // 0.00%
];

/// 16-byte minimum class; selected by the experimental switch.
#[rustfmt::skip]
pub(super) static EXPERIMENTAL_SIZE_CLASSES: [SizeClassInfo; 46] = [
    // <bytes>, <pages>, <batch size>    <tail waste>
    SizeClassInfo::new(      0,   0,   0), // sentinel
    SizeClassInfo::new(     16,   1,  32), // 0.00%
    SizeClassInfo::new(     32,   1,  32), // 0.00%
    SizeClassInfo::new(     48,   1,  32), // 0.39%
    SizeClassInfo::new(     64,   1,  32), // 0.00%
    SizeClassInfo::new(     80,   1,  32), // 0.39%
    SizeClassInfo::new(     96,   1,  32), // 1.56%
    SizeClassInfo::new(    112,   1,  32), // 1.56%
    SizeClassInfo::new(    128,   1,  32), // 0.00%
    SizeClassInfo::new(    144,   1,  32), // 1.56%
    SizeClassInfo::new(    160,   1,  32), // 2.34%
    SizeClassInfo::new(    176,   1,  32), // 1.17%
    SizeClassInfo::new(    200,   1,  32), // 2.34%
    SizeClassInfo::new(    224,   1,  32), // 1.56%
    SizeClassInfo::new(    248,   1,  32), // 3.12%
    SizeClassInfo::new(    272,   1,  32), // 0.39%
    SizeClassInfo::new(    304,   1,  32), // 3.52%
    SizeClassInfo::new(    336,   1,  32), // 1.56%
    SizeClassInfo::new(    368,   1,  32), // 1.17%
    SizeClassInfo::new(    408,   1,  32), // 0.39%
    SizeClassInfo::new(    448,   1,  32), // 1.56%
    SizeClassInfo::new(    496,   1,  32), // 3.12%
    SizeClassInfo::new(    576,   1,  32), // 1.56%
    SizeClassInfo::new(    640,   1,  32), // 6.25%
    SizeClassInfo::new(    704,   2,  32), // 5.47%
    SizeClassInfo::new(    832,   2,  32), // 8.59%
    SizeClassInfo::new(    960,   1,  32), // 6.25%
    SizeClassInfo::new(   1152,   2,  32), // 1.56%
    SizeClassInfo::new(   1280,   1,  32), // 6.25%
    SizeClassInfo::new(   1408,   3,  32), // 8.33%
    SizeClassInfo::new(   1664,   3,  32), // 5.21%
    SizeClassInfo::new(   1920,   1,  32), // 6.25%
    SizeClassInfo::new(   2176,   3,  30), // 11.46%
    SizeClassInfo::new(   2432,   2,  26), // 10.94%
    SizeClassInfo::new(   2688,   2,  24), // 1.56%
    SizeClassInfo::new(   2944,   3,  22), // 4.17%
    SizeClassInfo::new(   3328,   5,  19), // 2.50%
    SizeClassInfo::new(   3712,   1,  17), // 9.38%
    SizeClassInfo::new(   4096,   1,  16), // 0.00%
    SizeClassInfo::new(   4480,   5,  14), // 12.50%
    SizeClassInfo::new(   4992,   4,  13), // 8.59%
    SizeClassInfo::new(   5504,   3,  11), // 10.42%
    SizeClassInfo::new(   6144,   3,  10), // 0.00%
    SizeClassInfo::new(   6784,   5,   9), // 0.62%
    SizeClassInfo::new(   7424,   2,   8), // 9.38%
    SizeClassInfo::new(   8192,   2,   8), // 0.00%
];
