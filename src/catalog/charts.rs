//! Built-in size chart tables, one per storefront category.
//!
//! Values are body measurements in centimeters. Row order is size order.

use super::{MeasurementRange, SizeChart, SizeRow};

const fn interval(min: f64, max: f64) -> MeasurementRange {
    MeasurementRange::Interval { min, max }
}

const fn reference(value: f64) -> MeasurementRange {
    MeasurementRange::Reference(value)
}

pub const TSHIRTS: SizeChart = SizeChart {
    slug: "tshirts",
    title: "T-Shirts",
    description: Some("Regular fit, unisex sizing"),
    rows: &[
        SizeRow { size: "XS", chest: interval(80.0, 86.0), waist: interval(64.0, 70.0), hips: interval(82.0, 88.0) },
        SizeRow { size: "S", chest: interval(86.0, 92.0), waist: interval(70.0, 76.0), hips: interval(88.0, 94.0) },
        SizeRow { size: "M", chest: interval(92.0, 98.0), waist: interval(76.0, 82.0), hips: interval(94.0, 100.0) },
        SizeRow { size: "L", chest: interval(98.0, 104.0), waist: interval(82.0, 88.0), hips: interval(100.0, 106.0) },
        SizeRow { size: "XL", chest: interval(104.0, 110.0), waist: interval(88.0, 94.0), hips: interval(106.0, 112.0) },
        SizeRow { size: "XXL", chest: interval(110.0, 116.0), waist: interval(94.0, 100.0), hips: interval(112.0, 118.0) },
    ],
};

pub const SHIRTS: SizeChart = SizeChart {
    slug: "shirts",
    title: "Shirts",
    description: Some("Tailored fit with narrower grading than t-shirts"),
    rows: &[
        SizeRow { size: "XS", chest: interval(81.0, 86.0), waist: interval(65.0, 70.0), hips: interval(83.0, 88.0) },
        SizeRow { size: "S", chest: interval(86.0, 91.0), waist: interval(70.0, 75.0), hips: interval(88.0, 93.0) },
        SizeRow { size: "M", chest: interval(91.0, 96.0), waist: interval(75.0, 80.0), hips: interval(93.0, 98.0) },
        SizeRow { size: "L", chest: interval(96.0, 101.0), waist: interval(80.0, 85.0), hips: interval(98.0, 103.0) },
        SizeRow { size: "XL", chest: interval(101.0, 106.0), waist: interval(85.0, 90.0), hips: interval(103.0, 108.0) },
        SizeRow { size: "XXL", chest: interval(106.0, 111.0), waist: interval(90.0, 95.0), hips: interval(108.0, 113.0) },
    ],
};

pub const HOODIES: SizeChart = SizeChart {
    slug: "hoodies",
    title: "Hoodies & Sweatshirts",
    description: Some("Relaxed fit, wide grading"),
    rows: &[
        SizeRow { size: "XS", chest: interval(82.0, 90.0), waist: interval(66.0, 74.0), hips: interval(84.0, 92.0) },
        SizeRow { size: "S", chest: interval(90.0, 98.0), waist: interval(74.0, 82.0), hips: interval(92.0, 100.0) },
        SizeRow { size: "M", chest: interval(98.0, 106.0), waist: interval(82.0, 90.0), hips: interval(100.0, 108.0) },
        SizeRow { size: "L", chest: interval(106.0, 114.0), waist: interval(90.0, 98.0), hips: interval(108.0, 116.0) },
        SizeRow { size: "XL", chest: interval(114.0, 122.0), waist: interval(98.0, 106.0), hips: interval(116.0, 124.0) },
    ],
};

pub const JEANS: SizeChart = SizeChart {
    slug: "jeans",
    title: "Jeans",
    description: Some("Waist sizes in inches; chest is nominal only"),
    rows: &[
        SizeRow { size: "26", chest: reference(84.0), waist: interval(64.0, 69.0), hips: interval(86.0, 91.0) },
        SizeRow { size: "28", chest: reference(88.0), waist: interval(69.0, 74.0), hips: interval(91.0, 96.0) },
        SizeRow { size: "30", chest: reference(92.0), waist: interval(74.0, 79.0), hips: interval(96.0, 101.0) },
        SizeRow { size: "32", chest: reference(96.0), waist: interval(79.0, 84.0), hips: interval(101.0, 106.0) },
        SizeRow { size: "34", chest: reference(100.0), waist: interval(84.0, 89.0), hips: interval(106.0, 111.0) },
        SizeRow { size: "36", chest: reference(104.0), waist: interval(89.0, 94.0), hips: interval(111.0, 116.0) },
    ],
};

pub const DRESSES: SizeChart = SizeChart {
    slug: "dresses",
    title: "Dresses",
    description: None,
    rows: &[
        SizeRow { size: "XS", chest: interval(78.0, 84.0), waist: interval(60.0, 66.0), hips: interval(84.0, 90.0) },
        SizeRow { size: "S", chest: interval(84.0, 90.0), waist: interval(66.0, 72.0), hips: interval(90.0, 96.0) },
        SizeRow { size: "M", chest: interval(90.0, 96.0), waist: interval(72.0, 78.0), hips: interval(96.0, 102.0) },
        SizeRow { size: "L", chest: interval(96.0, 102.0), waist: interval(78.0, 84.0), hips: interval(102.0, 108.0) },
        SizeRow { size: "XL", chest: interval(102.0, 108.0), waist: interval(84.0, 90.0), hips: interval(108.0, 114.0) },
    ],
};

pub const JACKETS: SizeChart = SizeChart {
    slug: "jackets",
    title: "Jackets & Coats",
    description: Some("Sized for layering over midweight garments"),
    rows: &[
        SizeRow { size: "S", chest: interval(88.0, 95.0), waist: interval(72.0, 79.0), hips: interval(90.0, 97.0) },
        SizeRow { size: "M", chest: interval(95.0, 102.0), waist: interval(79.0, 86.0), hips: interval(97.0, 104.0) },
        SizeRow { size: "L", chest: interval(102.0, 109.0), waist: interval(86.0, 93.0), hips: interval(104.0, 111.0) },
        SizeRow { size: "XL", chest: interval(109.0, 116.0), waist: interval(93.0, 100.0), hips: interval(111.0, 118.0) },
        SizeRow { size: "XXL", chest: interval(116.0, 123.0), waist: interval(100.0, 107.0), hips: interval(118.0, 125.0) },
    ],
};

/// All charts, in storefront display order
pub const ALL_CHARTS: &[SizeChart] = &[TSHIRTS, SHIRTS, HOODIES, JEANS, DRESSES, JACKETS];
