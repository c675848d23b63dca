//! Compiled-in size classes for 32 KiB pages.

use crate::size_class_info::SizeClassInfo;

/// Production table.
#[rustfmt::skip]
pub(super) static SIZE_CLASSES: [SizeClassInfo; 78] = [
    // <bytes>, <pages>, <batch size>    <tail waste>
    SizeClassInfo::new(      0,   0,   0), // sentinel
    SizeClassInfo::new(      8,   1,  32), // 0.00%
    SizeClassInfo::new(     16,   1,  32), // 0.00%
    SizeClassInfo::new(     24,   1,  32), // 0.02%
    SizeClassInfo::new(     32,   1,  32), // 0.00%
    SizeClassInfo::new(     40,   1,  32), // 0.02%
    SizeClassInfo::new(     48,   1,  32), // 0.10%
    SizeClassInfo::new(     56,   1,  32), // 0.02%
    SizeClassInfo::new(     64,   1,  32), // 0.00%
    SizeClassInfo::new(     72,   1,  32), // 0.02%
    SizeClassInfo::new(     80,   1,  32), // 0.15%
    SizeClassInfo::new(     88,   1,  32), // 0.10%
    SizeClassInfo::new(     96,   1,  32), // 0.10%
    SizeClassInfo::new(    104,   1,  32), // 0.02%
    SizeClassInfo::new(    112,   1,  32), // 0.20%
    SizeClassInfo::new(    120,   1,  32), // 0.02%
    SizeClassInfo::new(    128,   1,  32), // 0.00%
    SizeClassInfo::new(    136,   1,  32), // 0.39%
    SizeClassInfo::new(    160,   1,  32), // 0.39%
    SizeClassInfo::new(    184,   1,  32), // 0.05%
    SizeClassInfo::new(    208,   1,  32), // 0.34%
    SizeClassInfo::new(    240,   1,  32), // 0.39%
    SizeClassInfo::new(    272,   1,  32), // 0.39%
    SizeClassInfo::new(    312,   1,  32), // 0.02%
    SizeClassInfo::new(    352,   1,  32), // 0.10%
    SizeClassInfo::new(    400,   1,  32), // 1.12%
    SizeClassInfo::new(    448,   1,  32), // 0.20%
    SizeClassInfo::new(    504,   1,  32), // 0.02%
    SizeClassInfo::new(    576,   1,  32), // 1.56%
    SizeClassInfo::new(    704,   1,  32), // 1.17%
    SizeClassInfo::new(    832,   1,  32), // 0.98%
    SizeClassInfo::new(    960,   1,  32), // 0.39%
    SizeClassInfo::new(   1152,   1,  32), // 1.56%
    SizeClassInfo::new(   1408,   1,  32), // 1.17%
    SizeClassInfo::new(   1664,   1,  32), // 3.52%
    SizeClassInfo::new(   1920,   1,  32), // 0.39%
    SizeClassInfo::new(   2176,   1,  30), // 0.39%
    SizeClassInfo::new(   2560,   1,  25), // 6.25%
    SizeClassInfo::new(   2944,   1,  22), // 1.17%
    SizeClassInfo::new(   3328,   1,  19), // 8.59%
    SizeClassInfo::new(   3840,   1,  17), // 6.25%
    SizeClassInfo::new(   4352,   1,  15), // 7.03%
    SizeClassInfo::new(   4992,   1,  13), // 8.59%
    SizeClassInfo::new(   5632,   2,  11), // 5.47%
    SizeClassInfo::new(   6400,   1,  10), // 2.34%
    SizeClassInfo::new(   7168,   1,   9), // 12.50%
    SizeClassInfo::new(   8064,   1,   8), // 1.56%
    SizeClassInfo::new(   9088,   2,   7), // 2.93%
    SizeClassInfo::new(  10240,   1,   6), // 6.25%
    SizeClassInfo::new(  11520,   2,   5), // 12.11%
    SizeClassInfo::new(  12928,   2,   5), // 1.37%
    SizeClassInfo::new(  14464,   1,   4), // 11.72%
    SizeClassInfo::new(  16256,   1,   4), // 0.78%
    SizeClassInfo::new(  18176,   3,   3), // 7.55%
    SizeClassInfo::new(  20352,   2,   3), // 6.84%
    SizeClassInfo::new(  22784,   3,   2), // 7.29%
    SizeClassInfo::new(  25472,   4,   2), // 2.83%
    SizeClassInfo::new(  28544,   7,   2), // 0.45%
    SizeClassInfo::new(  32000,   1,   2), // 2.34%
    SizeClassInfo::new(  35840,   5,   2), // 12.50%
    SizeClassInfo::new(  40064,   4,   2), // 8.30%
    SizeClassInfo::new(  44800,   3,   2), // 8.85%
    SizeClassInfo::new(  50176,   5,   2), // 8.12%
    SizeClassInfo::new(  56192,   7,   2), // 2.01%
    SizeClassInfo::new(  62848,   2,   2), // 4.10%
    SizeClassInfo::new(  70272,   7,   2), // 8.09%
    SizeClassInfo::new(  78592,   5,   2), // 4.06%
    SizeClassInfo::new(  87936,   3,   2), // 10.55%
    SizeClassInfo::new(  98304,   3,   2), // 0.00%
    SizeClassInfo::new( 109952,   7,   2), // 4.13%
    SizeClassInfo::new( 123008,   4,   2), // 6.15%
    SizeClassInfo::new( 137600,   9,   2), // 6.68%
    SizeClassInfo::new( 153856,   5,   2), // 6.09%
    SizeClassInfo::new( 172032,   6,   2), // 12.50%
    SizeClassInfo::new( 192384,   6,   2), // 2.15%
    SizeClassInfo::new( 215040,   7,   2), // 6.25%
    SizeClassInfo::new( 240384,   8,   2), // 8.30%
    SizeClassInfo::new( 262144,   8,   2), // 0.00%
];

/// 16-byte minimum class; selected by the experimental switch.
#[rustfmt::skip]
pub(super) static EXPERIMENTAL_SIZE_CLASSES: [SizeClassInfo; 78] = [
    // <bytes>, <pages>, <batch size>    <tail waste>
    SizeClassInfo::new(      0,   0,   0), // sentinel
    SizeClassInfo::new(     16,   1,  32), // 0.00%
    SizeClassInfo::new(     32,   1,  32), // 0.00%
    SizeClassInfo::new(     48,   1,  32), // 0.10%
    SizeClassInfo::new(     64,   1,  32), // 0.00%
    SizeClassInfo::new(     80,   1,  32), // 0.15%
    SizeClassInfo::new(     96,   1,  32), // 0.10%
    SizeClassInfo::new(    112,   1,  32), // 0.20%
    SizeClassInfo::new(    128,   1,  32), // 0.00%
    SizeClassInfo::new(    144,   1,  32), // 0.24%
    SizeClassInfo::new(    160,   1,  32), // 0.39%
    SizeClassInfo::new(    176,   1,  32), // 0.10%
    SizeClassInfo::new(    192,   1,  32), // 0.39%
    SizeClassInfo::new(    208,   1,  32), // 0.34%
    SizeClassInfo::new(    224,   1,  32), // 0.20%
    SizeClassInfo::new(    240,   1,  32), // 0.39%
    SizeClassInfo::new(    256,   1,  32), // 0.00%
    SizeClassInfo::new(    288,   1,  32), // 0.68%
    SizeClassInfo::new(    320,   1,  32), // 0.39%
    SizeClassInfo::new(    360,   1,  32), // 0.02%
    SizeClassInfo::new(    400,   1,  32), // 1.12%
    SizeClassInfo::new(    448,   1,  32), // 0.20%
    SizeClassInfo::new(    504,   1,  32), // 0.02%
    SizeClassInfo::new(    576,   1,  32), // 1.56%
    SizeClassInfo::new(    640,   1,  32), // 0.39%
    SizeClassInfo::new(    768,   1,  32), // 1.56%
    SizeClassInfo::new(    896,   1,  32), // 1.56%
    SizeClassInfo::new(   1024,   1,  32), // 0.00%
    SizeClassInfo::new(   1152,   1,  32), // 1.56%
    SizeClassInfo::new(   1280,   1,  32), // 2.34%
    SizeClassInfo::new(   1536,   1,  32), // 1.56%
    SizeClassInfo::new(   1792,   1,  32), // 1.56%
    SizeClassInfo::new(   2048,   1,  32), // 0.00%
    SizeClassInfo::new(   2304,   1,  28), // 1.56%
    SizeClassInfo::new(   2560,   1,  25), // 6.25%
    SizeClassInfo::new(   2944,   1,  22), // 1.17%
    SizeClassInfo::new(   3328,   1,  19), // 8.59%
    SizeClassInfo::new(   3712,   1,  17), // 9.38%
    SizeClassInfo::new(   4224,   1,  15), // 9.77%
    SizeClassInfo::new(   4736,   2,  13), // 6.05%
    SizeClassInfo::new(   5376,   1,  12), // 1.56%
    SizeClassInfo::new(   6016,   1,  10), // 8.20%
    SizeClassInfo::new(   6784,   2,   9), // 6.84%
    SizeClassInfo::new(   7552,   1,   8), // 7.81%
    SizeClassInfo::new(   8448,   2,   7), // 9.77%
    SizeClassInfo::new(   9472,   3,   6), // 3.65%
    SizeClassInfo::new(  10624,   1,   6), // 2.73%
    SizeClassInfo::new(  11776,   2,   5), // 10.16%
    SizeClassInfo::new(  13056,   2,   5), // 0.39%
    SizeClassInfo::new(  14592,   1,   4), // 10.94%
    SizeClassInfo::new(  16256,   1,   4), // 0.78%
    SizeClassInfo::new(  18048,   3,   3), // 8.20%
    SizeClassInfo::new(  20096,   2,   3), // 8.01%
    SizeClassInfo::new(  22272,   3,   2), // 9.38%
    SizeClassInfo::new(  24704,   4,   2), // 5.76%
    SizeClassInfo::new(  27392,   6,   2), // 2.47%
    SizeClassInfo::new(  30464,   1,   2), // 7.03%
    SizeClassInfo::new(  33792,   7,   2), // 11.61%
    SizeClassInfo::new(  37504,   5,   2), // 8.44%
    SizeClassInfo::new(  41600,   4,   2), // 4.79%
    SizeClassInfo::new(  46208,   3,   2), // 5.99%
    SizeClassInfo::new(  51328,   5,   2), // 6.02%
    SizeClassInfo::new(  56960,   7,   2), // 0.67%
    SizeClassInfo::new(  63232,   2,   2), // 3.52%
    SizeClassInfo::new(  70144,   7,   2), // 8.26%
    SizeClassInfo::new(  77824,   5,   2), // 5.00%
    SizeClassInfo::new(  86272,   3,   2), // 12.24%
    SizeClassInfo::new(  95616,   3,   2), // 2.73%
    SizeClassInfo::new( 105984,   7,   2), // 7.59%
    SizeClassInfo::new( 117504,   4,   2), // 10.35%
    SizeClassInfo::new( 130304,   4,   2), // 0.59%
    SizeClassInfo::new( 144512,   5,   2), // 11.80%
    SizeClassInfo::new( 160256,   5,   2), // 2.19%
    SizeClassInfo::new( 177664,   6,   2), // 9.64%
    SizeClassInfo::new( 196992,  13,   2), // 7.51%
    SizeClassInfo::new( 218368,   7,   2), // 4.80%
    SizeClassInfo::new( 242048,   8,   2), // 7.67%
    SizeClassInfo::new( 262144,   8,   2), // 0.00%
];
