//! Compiled-in size classes for 8 KiB pages.

use crate::size_class_info::SizeClassInfo;

/// Production table.
#[rustfmt::skip]
pub(super) static SIZE_CLASSES: [SizeClassInfo; 86] = [
    // <bytes>, <pages>, <batch size>    <tail waste>
    SizeClassInfo::new(      0,   0,   0), // sentinel
    SizeClassInfo::new(      8,   1,  32), // 0.00%
    SizeClassInfo::new(     16,   1,  32), // 0.00%
    SizeClassInfo::new(     24,   1,  32), // 0.10%
    SizeClassInfo::new(     32,   1,  32), // 0.00%
    SizeClassInfo::new(     40,   1,  32), // 0.39%
    SizeClassInfo::new(     48,   1,  32), // 0.39%
    SizeClassInfo::new(     56,   1,  32), // 0.20%
    SizeClassInfo::new(     64,   1,  32), // 0.00%
    SizeClassInfo::new(     72,   1,  32), // 0.68%
    SizeClassInfo::new(     80,   1,  32), // 0.39%
    SizeClassInfo::new(     88,   1,  32), // 0.10%
    SizeClassInfo::new(     96,   1,  32), // 0.39%
    SizeClassInfo::new(    104,   1,  32), // 0.98%
    SizeClassInfo::new(    112,   1,  32), // 0.20%
    SizeClassInfo::new(    120,   1,  32), // 0.39%
    SizeClassInfo::new(    128,   1,  32), // 0.00%
    SizeClassInfo::new(    144,   1,  32), // 1.56%
    SizeClassInfo::new(    160,   1,  32), // 0.39%
    SizeClassInfo::new(    184,   1,  32), // 1.17%
    SizeClassInfo::new(    208,   1,  32), // 0.98%
    SizeClassInfo::new(    232,   1,  32), // 0.88%
    SizeClassInfo::new(    256,   1,  32), // 0.00%
    SizeClassInfo::new(    288,   1,  32), // 1.56%
    SizeClassInfo::new(    320,   1,  32), // 2.34%
    SizeClassInfo::new(    360,   1,  32), // 3.32%
    SizeClassInfo::new(    400,   1,  32), // 2.34%
    SizeClassInfo::new(    448,   1,  32), // 1.56%
    SizeClassInfo::new(    496,   1,  32), // 3.12%
    SizeClassInfo::new(    576,   1,  32), // 1.56%
    SizeClassInfo::new(    640,   1,  32), // 6.25%
    SizeClassInfo::new(    768,   1,  32), // 6.25%
    SizeClassInfo::new(    896,   1,  32), // 1.56%
    SizeClassInfo::new(   1024,   1,  32), // 0.00%
    SizeClassInfo::new(   1152,   1,  32), // 1.56%
    SizeClassInfo::new(   1280,   1,  32), // 6.25%
    SizeClassInfo::new(   1536,   1,  32), // 6.25%
    SizeClassInfo::new(   1792,   1,  32), // 12.50%
    SizeClassInfo::new(   2048,   1,  32), // 0.00%
    SizeClassInfo::new(   2304,   2,  28), // 1.56%
    SizeClassInfo::new(   2560,   1,  25), // 6.25%
    SizeClassInfo::new(   2944,   2,  22), // 10.16%
    SizeClassInfo::new(   3328,   3,  19), // 5.21%
    SizeClassInfo::new(   3712,   1,  17), // 9.38%
    SizeClassInfo::new(   4096,   1,  16), // 0.00%
    SizeClassInfo::new(   4608,   3,  14), // 6.25%
    SizeClassInfo::new(   5120,   2,  12), // 6.25%
    SizeClassInfo::new(   5760,   3,  11), // 6.25%
    SizeClassInfo::new(   6400,   4,  10), // 2.34%
    SizeClassInfo::new(   7168,   1,   9), // 12.50%
    SizeClassInfo::new(   7936,   1,   8), // 3.12%
    SizeClassInfo::new(   8832,   6,   7), // 10.16%
    SizeClassInfo::new(   9856,   4,   6), // 9.77%
    SizeClassInfo::new(  10880,   3,   6), // 11.46%
    SizeClassInfo::new(  12032,   3,   5), // 2.08%
    SizeClassInfo::new(  13312,   5,   4), // 2.50%
    SizeClassInfo::new(  14720,   2,   4), // 10.16%
    SizeClassInfo::new(  16256,   2,   4), // 0.78%
    SizeClassInfo::new(  18048,   5,   3), // 11.88%
    SizeClassInfo::new(  19968,   5,   3), // 2.50%
    SizeClassInfo::new(  22144,   3,   2), // 9.90%
    SizeClassInfo::new(  24448,   3,   2), // 0.52%
    SizeClassInfo::new(  27008,   7,   2), // 5.80%
    SizeClassInfo::new(  29824,   4,   2), // 8.98%
    SizeClassInfo::new(  32896,   9,   2), // 10.76%
    SizeClassInfo::new(  36352,   5,   2), // 11.25%
    SizeClassInfo::new(  40192,   5,   2), // 1.88%
    SizeClassInfo::new(  44416,   6,   2), // 9.64%
    SizeClassInfo::new(  49024,   6,   2), // 0.26%
    SizeClassInfo::new(  54144,   7,   2), // 5.58%
    SizeClassInfo::new(  59776,   8,   2), // 8.79%
    SizeClassInfo::new(  66048,   9,   2), // 10.42%
    SizeClassInfo::new(  72960,   9,   2), // 1.04%
    SizeClassInfo::new(  80512,  10,   2), // 1.72%
    SizeClassInfo::new(  88832,  11,   2), // 1.42%
    SizeClassInfo::new(  98048,  12,   2), // 0.26%
    SizeClassInfo::new( 108160,  14,   2), // 5.69%
    SizeClassInfo::new( 119424,  15,   2), // 2.81%
    SizeClassInfo::new( 131840,  17,   2), // 5.33%
    SizeClassInfo::new( 145536,  18,   2), // 1.30%
    SizeClassInfo::new( 160640,  20,   2), // 1.95%
    SizeClassInfo::new( 177280,  22,   2), // 1.63%
    SizeClassInfo::new( 195584,  24,   2), // 0.52%
    SizeClassInfo::new( 215808,  27,   2), // 2.43%
    SizeClassInfo::new( 238080,  30,   2), // 3.12%
    SizeClassInfo::new( 262144,  32,   2), // 0.00%
];

/// 16-byte minimum class; selected by the experimental switch.
#[rustfmt::skip]
pub(super) static EXPERIMENTAL_SIZE_CLASSES: [SizeClassInfo; 86] = [
    // <bytes>, <pages>, <batch size>    <tail waste>
    SizeClassInfo::new(      0,   0,   0), // sentinel
    SizeClassInfo::new(     16,   1,  32), // 0.00%
    SizeClassInfo::new(     32,   1,  32), // 0.00%
    SizeClassInfo::new(     48,   1,  32), // 0.39%
    SizeClassInfo::new(     64,   1,  32), // 0.00%
    SizeClassInfo::new(     80,   1,  32), // 0.39%
    SizeClassInfo::new(     96,   1,  32), // 0.39%
    SizeClassInfo::new(    112,   1,  32), // 0.20%
    SizeClassInfo::new(    128,   1,  32), // 0.00%
    SizeClassInfo::new(    144,   1,  32), // 1.56%
    SizeClassInfo::new(    160,   1,  32), // 0.39%
    SizeClassInfo::new(    176,   1,  32), // 1.17%
    SizeClassInfo::new(    192,   1,  32), // 1.56%
    SizeClassInfo::new(    208,   1,  32), // 0.98%
    SizeClassInfo::new(    224,   1,  32), // 1.56%
    SizeClassInfo::new(    240,   1,  32), // 0.39%
    SizeClassInfo::new(    256,   1,  32), // 0.00%
    SizeClassInfo::new(    280,   1,  32), // 0.88%
    SizeClassInfo::new(    312,   1,  32), // 0.98%
    SizeClassInfo::new(    344,   1,  32), // 3.42%
    SizeClassInfo::new(    384,   1,  32), // 1.56%
    SizeClassInfo::new(    424,   1,  32), // 1.66%
    SizeClassInfo::new(    464,   1,  32), // 3.71%
    SizeClassInfo::new(    512,   1,  32), // 0.00%
    SizeClassInfo::new(    576,   1,  32), // 1.56%
    SizeClassInfo::new(    640,   1,  32), // 6.25%
    SizeClassInfo::new(    704,   1,  32), // 5.47%
    SizeClassInfo::new(    832,   1,  32), // 8.59%
    SizeClassInfo::new(    960,   1,  32), // 6.25%
    SizeClassInfo::new(   1152,   1,  32), // 1.56%
    SizeClassInfo::new(   1280,   1,  32), // 6.25%
    SizeClassInfo::new(   1408,   2,  32), // 5.47%
    SizeClassInfo::new(   1664,   2,  32), // 8.59%
    SizeClassInfo::new(   1920,   1,  32), // 6.25%
    SizeClassInfo::new(   2176,   2,  30), // 7.03%
    SizeClassInfo::new(   2432,   1,  26), // 10.94%
    SizeClassInfo::new(   2688,   1,  24), // 1.56%
    SizeClassInfo::new(   2944,   2,  22), // 10.16%
    SizeClassInfo::new(   3328,   3,  19), // 5.21%
    SizeClassInfo::new(   3712,   1,  17), // 9.38%
    SizeClassInfo::new(   4096,   1,  16), // 0.00%
    SizeClassInfo::new(   4480,   3,  14), // 8.85%
    SizeClassInfo::new(   4992,   2,  13), // 8.59%
    SizeClassInfo::new(   5504,   3,  11), // 10.42%
    SizeClassInfo::new(   6144,   3,  10), // 0.00%
    SizeClassInfo::new(   6784,   5,   9), // 0.62%
    SizeClassInfo::new(   7424,   1,   8), // 9.38%
    SizeClassInfo::new(   8192,   1,   8), // 0.00%
    SizeClassInfo::new(   8960,   5,   7), // 12.50%
    SizeClassInfo::new(   9856,   4,   6), // 9.77%
    SizeClassInfo::new(  10880,   3,   6), // 11.46%
    SizeClassInfo::new(  11904,   3,   5), // 3.12%
    SizeClassInfo::new(  13056,   5,   5), // 4.38%
    SizeClassInfo::new(  14336,   2,   4), // 12.50%
    SizeClassInfo::new(  15744,   2,   4), // 3.91%
    SizeClassInfo::new(  17280,   7,   3), // 9.60%
    SizeClassInfo::new(  18944,   5,   3), // 7.50%
    SizeClassInfo::new(  20736,   8,   3), // 5.08%
    SizeClassInfo::new(  22784,   3,   2), // 7.29%
    SizeClassInfo::new(  24960,  10,   2), // 8.59%
    SizeClassInfo::new(  27392,   7,   2), // 4.46%
    SizeClassInfo::new(  30080,   4,   2), // 8.20%
    SizeClassInfo::new(  33024,   9,   2), // 10.42%
    SizeClassInfo::new(  36224,   5,   2), // 11.56%
    SizeClassInfo::new(  39680,   5,   2), // 3.12%
    SizeClassInfo::new(  43520,   6,   2), // 11.46%
    SizeClassInfo::new(  47616,   6,   2), // 3.12%
    SizeClassInfo::new(  52096,   7,   2), // 9.15%
    SizeClassInfo::new(  57088,   7,   2), // 0.45%
    SizeClassInfo::new(  62464,   8,   2), // 4.69%
    SizeClassInfo::new(  68352,   9,   2), // 7.29%
    SizeClassInfo::new(  74880,  10,   2), // 8.59%
    SizeClassInfo::new(  81920,  10,   2), // 0.00%
    SizeClassInfo::new(  89600,  11,   2), // 0.57%
    SizeClassInfo::new(  98048,  12,   2), // 0.26%
    SizeClassInfo::new( 107264,  14,   2), // 6.47%
    SizeClassInfo::new( 117376,  15,   2), // 4.48%
    SizeClassInfo::new( 128384,  16,   2), // 2.05%
    SizeClassInfo::new( 140544,  18,   2), // 4.69%
    SizeClassInfo::new( 153728,  19,   2), // 1.23%
    SizeClassInfo::new( 168192,  21,   2), // 2.23%
    SizeClassInfo::new( 184064,  23,   2), // 2.31%
    SizeClassInfo::new( 201344,  25,   2), // 1.69%
    SizeClassInfo::new( 220288,  27,   2), // 0.41%
    SizeClassInfo::new( 241024,  30,   2), // 1.93%
    SizeClassInfo::new( 262144,  32,   2), // 0.00%
];
