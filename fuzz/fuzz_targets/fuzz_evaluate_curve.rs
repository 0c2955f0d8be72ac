#![no_main]

use curve_kernel::{evaluate_curve, CurveStyle, Path, Point, RadiusMode};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    let (header, coords) = data.split_at(4);
    let closed = header[0] & 1 == 1;
    let segments = (header[1] % 24) as usize;
    let param = header[2] as f64 / 64.0 - 1.0;

    let style = match header[3] % 5 {
        0 => CurveStyle::Linear {
            segments_per_edge: segments,
        },
        1 => CurveStyle::CatmullRom {
            tension: param,
            segments_per_edge: segments,
        },
        2 => CurveStyle::b_spline(param * 4.0, segments),
        3 => CurveStyle::Fillet {
            mode: RadiusMode::Relative,
            value: param,
            segments_per_arc: segments,
            exact: true,
        },
        _ => CurveStyle::Fillet {
            mode: RadiusMode::Absolute,
            value: param * 10.0,
            segments_per_arc: segments,
            exact: false,
        },
    };

    let points = coords
        .chunks_exact(2)
        .map(|c| Point::new(c[0] as f64, c[1] as f64))
        .collect();
    let result = evaluate_curve(&Path::new(points, closed), &style);
    assert!(result.iter().all(|p| p.is_finite()));
});
