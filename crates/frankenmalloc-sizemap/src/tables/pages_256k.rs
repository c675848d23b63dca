//! Compiled-in size classes for 256 KiB pages.

use crate::size_class_info::SizeClassInfo;

/// Production table.
#[rustfmt::skip]
pub(super) static SIZE_CLASSES: [SizeClassInfo; 89] = [
    // <bytes>, <pages>, <batch size>    <tail waste>
    SizeClassInfo::new(      0,   0,   0), // sentinel
    SizeClassInfo::new(      8,   1,  32), // 0.00%
    SizeClassInfo::new(     16,   1,  32), // 0.00%
    SizeClassInfo::new(     24,   1,  32), // 0.01%
    SizeClassInfo::new(     32,   1,  32), // 0.00%
    SizeClassInfo::new(     40,   1,  32), // 0.01%
    SizeClassInfo::new(     48,   1,  32), // 0.01%
    SizeClassInfo::new(     56,   1,  32), // 0.00%
    SizeClassInfo::new(     64,   1,  32), // 0.00%
    SizeClassInfo::new(     72,   1,  32), // 0.02%
    SizeClassInfo::new(     80,   1,  32), // 0.02%
    SizeClassInfo::new(     88,   1,  32), // 0.03%
    SizeClassInfo::new(     96,   1,  32), // 0.02%
    SizeClassInfo::new(    104,   1,  32), // 0.02%
    SizeClassInfo::new(    112,   1,  32), // 0.02%
    SizeClassInfo::new(    120,   1,  32), // 0.02%
    SizeClassInfo::new(    128,   1,  32), // 0.00%
    SizeClassInfo::new(    144,   1,  32), // 0.02%
    SizeClassInfo::new(    160,   1,  32), // 0.02%
    SizeClassInfo::new(    176,   1,  32), // 0.03%
    SizeClassInfo::new(    200,   1,  32), // 0.05%
    SizeClassInfo::new(    224,   1,  32), // 0.02%
    SizeClassInfo::new(    248,   1,  32), // 0.00%
    SizeClassInfo::new(    280,   1,  32), // 0.02%
    SizeClassInfo::new(    312,   1,  32), // 0.02%
    SizeClassInfo::new(    344,   1,  32), // 0.01%
    SizeClassInfo::new(    384,   1,  32), // 0.10%
    SizeClassInfo::new(    424,   1,  32), // 0.04%
    SizeClassInfo::new(    472,   1,  32), // 0.07%
    SizeClassInfo::new(    576,   1,  32), // 0.02%
    SizeClassInfo::new(    640,   1,  32), // 0.15%
    SizeClassInfo::new(    704,   1,  32), // 0.10%
    SizeClassInfo::new(    832,   1,  32), // 0.02%
    SizeClassInfo::new(    960,   1,  32), // 0.02%
    SizeClassInfo::new(   1152,   1,  32), // 0.24%
    SizeClassInfo::new(   1280,   1,  32), // 0.39%
    SizeClassInfo::new(   1408,   1,  32), // 0.10%
    SizeClassInfo::new(   1664,   1,  32), // 0.34%
    SizeClassInfo::new(   1920,   1,  32), // 0.39%
    SizeClassInfo::new(   2176,   1,  30), // 0.39%
    SizeClassInfo::new(   2432,   1,  26), // 0.73%
    SizeClassInfo::new(   2688,   1,  24), // 0.54%
    SizeClassInfo::new(   3072,   1,  21), // 0.39%
    SizeClassInfo::new(   3456,   1,  18), // 1.12%
    SizeClassInfo::new(   3840,   1,  17), // 0.39%
    SizeClassInfo::new(   4224,   1,  15), // 0.10%
    SizeClassInfo::new(   4736,   1,  13), // 0.63%
    SizeClassInfo::new(   5248,   1,  12), // 1.90%
    SizeClassInfo::new(   5888,   1,  11), // 1.17%
    SizeClassInfo::new(   6528,   1,  10), // 0.39%
    SizeClassInfo::new(   7168,   1,   9), // 1.56%
    SizeClassInfo::new(   7936,   1,   8), // 0.10%
    SizeClassInfo::new(   8832,   1,   7), // 2.29%
    SizeClassInfo::new(   9728,   1,   6), // 3.52%
    SizeClassInfo::new(  10752,   1,   6), // 1.56%
    SizeClassInfo::new(  11904,   1,   5), // 0.10%
    SizeClassInfo::new(  13184,   1,   4), // 4.44%
    SizeClassInfo::new(  14592,   1,   4), // 5.37%
    SizeClassInfo::new(  16128,   1,   4), // 1.56%
    SizeClassInfo::new(  17792,   1,   3), // 4.98%
    SizeClassInfo::new(  19584,   1,   3), // 2.88%
    SizeClassInfo::new(  21504,   1,   3), // 1.56%
    SizeClassInfo::new(  23680,   1,   2), // 0.63%
    SizeClassInfo::new(  26112,   1,   2), // 0.39%
    SizeClassInfo::new(  28672,   1,   2), // 1.56%
    SizeClassInfo::new(  31488,   1,   2), // 3.91%
    SizeClassInfo::new(  34688,   1,   2), // 7.37%
    SizeClassInfo::new(  38144,   2,   2), // 5.42%
    SizeClassInfo::new(  41984,   1,   2), // 3.91%
    SizeClassInfo::new(  46208,   1,   2), // 11.87%
    SizeClassInfo::new(  50816,   1,   2), // 3.08%
    SizeClassInfo::new(  55808,   2,   2), // 4.20%
    SizeClassInfo::new(  61312,   1,   2), // 6.45%
    SizeClassInfo::new(  67328,   2,   2), // 10.11%
    SizeClassInfo::new(  73984,   2,   2), // 1.22%
    SizeClassInfo::new(  81280,   1,   2), // 6.98%
    SizeClassInfo::new(  89344,   3,   2), // 9.11%
    SizeClassInfo::new(  98176,   2,   2), // 6.37%
    SizeClassInfo::new( 107776,   3,   2), // 4.07%
    SizeClassInfo::new( 118400,   1,   2), // 9.67%
    SizeClassInfo::new( 130048,   1,   2), // 0.78%
    SizeClassInfo::new( 142848,   3,   2), // 9.18%
    SizeClassInfo::new( 156928,   2,   2), // 10.21%
    SizeClassInfo::new( 172288,   2,   2), // 1.42%
    SizeClassInfo::new( 189184,   3,   2), // 3.78%
    SizeClassInfo::new( 207744,   4,   2), // 0.94%
    SizeClassInfo::new( 228096,   7,   2), // 0.56%
    SizeClassInfo::new( 250496,   1,   2), // 4.44%
    SizeClassInfo::new( 262144,   1,   2), // 0.00%
];

/// 16-byte minimum class; selected by the experimental switch.
#[rustfmt::skip]
pub(super) static EXPERIMENTAL_SIZE_CLASSES: [SizeClassInfo; 89] = [
    // <bytes>, <pages>, <batch size>    <tail waste>
    SizeClassInfo::new(      0,   0,   0), // sentinel
    SizeClassInfo::new(     16,   1,  32), // 0.00%
    SizeClassInfo::new(     32,   1,  32), // 0.00%
    SizeClassInfo::new(     48,   1,  32), // 0.01%
    SizeClassInfo::new(     64,   1,  32), // 0.00%
    SizeClassInfo::new(     80,   1,  32), // 0.02%
    SizeClassInfo::new(     96,   1,  32), // 0.02%
    SizeClassInfo::new(    112,   1,  32), // 0.02%
    SizeClassInfo::new(    128,   1,  32), // 0.00%
    SizeClassInfo::new(    144,   1,  32), // 0.02%
    SizeClassInfo::new(    160,   1,  32), // 0.02%
    SizeClassInfo::new(    176,   1,  32), // 0.03%
    SizeClassInfo::new(    192,   1,  32), // 0.02%
    SizeClassInfo::new(    208,   1,  32), // 0.02%
    SizeClassInfo::new(    224,   1,  32), // 0.02%
    SizeClassInfo::new(    240,   1,  32), // 0.02%
    SizeClassInfo::new(    256,   1,  32), // 0.00%
    SizeClassInfo::new(    280,   1,  32), // 0.02%
    SizeClassInfo::new(    312,   1,  32), // 0.02%
    SizeClassInfo::new(    344,   1,  32), // 0.01%
    SizeClassInfo::new(    376,   1,  32), // 0.03%
    SizeClassInfo::new(    416,   1,  32), // 0.02%
    SizeClassInfo::new(    456,   1,  32), // 0.15%
    SizeClassInfo::new(    504,   1,  32), // 0.02%
    SizeClassInfo::new(    576,   1,  32), // 0.02%
    SizeClassInfo::new(    640,   1,  32), // 0.15%
    SizeClassInfo::new(    704,   1,  32), // 0.10%
    SizeClassInfo::new(    768,   1,  32), // 0.10%
    SizeClassInfo::new(    896,   1,  32), // 0.20%
    SizeClassInfo::new(   1024,   1,  32), // 0.00%
    SizeClassInfo::new(   1152,   1,  32), // 0.24%
    SizeClassInfo::new(   1280,   1,  32), // 0.39%
    SizeClassInfo::new(   1408,   1,  32), // 0.10%
    SizeClassInfo::new(   1536,   1,  32), // 0.39%
    SizeClassInfo::new(   1792,   1,  32), // 0.20%
    SizeClassInfo::new(   2048,   1,  32), // 0.00%
    SizeClassInfo::new(   2304,   1,  28), // 0.68%
    SizeClassInfo::new(   2560,   1,  25), // 0.39%
    SizeClassInfo::new(   2816,   1,  23), // 0.10%
    SizeClassInfo::new(   3072,   1,  21), // 0.39%
    SizeClassInfo::new(   3456,   1,  18), // 1.12%
    SizeClassInfo::new(   3840,   1,  17), // 0.39%
    SizeClassInfo::new(   4224,   1,  15), // 0.10%
    SizeClassInfo::new(   4608,   1,  14), // 1.56%
    SizeClassInfo::new(   5120,   1,  12), // 0.39%
    SizeClassInfo::new(   5632,   1,  11), // 1.17%
    SizeClassInfo::new(   6144,   1,  10), // 1.56%
    SizeClassInfo::new(   6784,   1,   9), // 1.66%
    SizeClassInfo::new(   7424,   1,   8), // 0.88%
    SizeClassInfo::new(   8192,   1,   8), // 0.00%
    SizeClassInfo::new(   8960,   1,   7), // 0.88%
    SizeClassInfo::new(   9856,   1,   6), // 2.25%
    SizeClassInfo::new(  10752,   1,   6), // 1.56%
    SizeClassInfo::new(  11776,   1,   5), // 1.17%
    SizeClassInfo::new(  12928,   1,   5), // 1.37%
    SizeClassInfo::new(  14208,   1,   4), // 2.44%
    SizeClassInfo::new(  15616,   1,   4), // 4.69%
    SizeClassInfo::new(  17152,   1,   3), // 1.86%
    SizeClassInfo::new(  18816,   1,   3), // 6.69%
    SizeClassInfo::new(  20608,   1,   3), // 5.66%
    SizeClassInfo::new(  22528,   1,   2), // 5.47%
    SizeClassInfo::new(  24576,   1,   2), // 6.25%
    SizeClassInfo::new(  26880,   1,   2), // 7.71%
    SizeClassInfo::new(  29440,   1,   2), // 10.16%
    SizeClassInfo::new(  32128,   1,   2), // 1.95%
    SizeClassInfo::new(  35072,   1,   2), // 6.35%
    SizeClassInfo::new(  38272,   1,   2), // 12.40%
    SizeClassInfo::new(  41856,   1,   2), // 4.20%
    SizeClassInfo::new(  45696,   2,   2), // 4.13%
    SizeClassInfo::new(  49920,   1,   2), // 4.79%
    SizeClassInfo::new(  54528,   2,   2), // 6.40%
    SizeClassInfo::new(  59520,   1,   2), // 9.18%
    SizeClassInfo::new(  65024,   1,   2), // 0.78%
    SizeClassInfo::new(  71040,   2,   2), // 5.15%
    SizeClassInfo::new(  77568,   1,   2), // 11.23%
    SizeClassInfo::new(  84608,   1,   2), // 3.17%
    SizeClassInfo::new(  92288,   2,   2), // 11.99%
    SizeClassInfo::new( 100736,   2,   2), // 3.93%
    SizeClassInfo::new( 109952,   3,   2), // 2.13%
    SizeClassInfo::new( 119936,   1,   2), // 8.50%
    SizeClassInfo::new( 130944,   1,   2), // 0.10%
    SizeClassInfo::new( 142848,   3,   2), // 9.18%
    SizeClassInfo::new( 155904,   2,   2), // 10.79%
    SizeClassInfo::new( 170112,   2,   2), // 2.66%
    SizeClassInfo::new( 185600,   3,   2), // 5.60%
    SizeClassInfo::new( 202496,   4,   2), // 3.44%
    SizeClassInfo::new( 220928,   6,   2), // 1.68%
    SizeClassInfo::new( 241024,   1,   2), // 8.06%
    SizeClassInfo::new( 262144,   1,   2), // 0.00%
];
