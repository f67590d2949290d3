//! Sample datasets shared by the unit tests.

/// Daily access counts over thirty days.
pub(crate) const ACCESS: [u32; 30] = [
    354, 351, 344, 362, 327, 349, 361, 360, 333, 366, 343, 349, 358, 373, 334, 338, 355, 329, 370,
    324, 387, 370, 357, 342, 338, 320, 359, 308, 323, 338,
];

/// The access counts with one low value (319 instead of 320), used for the
/// histogram fixture.
pub(crate) const ACCESS_HISTOGRAM: [u32; 30] = [
    354, 351, 344, 362, 327, 349, 361, 360, 333, 366, 343, 349, 358, 373, 334, 338, 355, 329, 370,
    324, 387, 370, 357, 342, 338, 319, 359, 308, 323, 338,
];

/// Monthly sales per store for twenty stores.
pub(crate) const SALES: [u32; 20] = [
    2024, 2164, 6465, 2186, 2348, 1981, 2256, 3177, 1861, 3249, 2464, 1975, 2496, 3246, 2465, 1654,
    2654, 3321, 6612, 3189,
];
