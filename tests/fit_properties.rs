use meme_core_view::{fit_image, MemeError};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

const TOLERANCE: f64 = 1e-6;

/// Map arbitrary input onto a positive dimension in 1..=10_000.
fn dimension(raw: u16) -> f64 {
    f64::from(raw % 10_000) + 1.0
}

#[quickcheck]
fn fit_stays_inside_canvas(cw: u16, ch: u16, iw: u16, ih: u16) -> bool {
    let (cw, ch) = (dimension(cw), dimension(ch));
    let fit = fit_image(cw, ch, dimension(iw), dimension(ih)).unwrap();
    fit.fits_within(cw, ch) && fit.width <= cw + TOLERANCE && fit.height <= ch + TOLERANCE
}

#[quickcheck]
fn fit_preserves_aspect_ratio(cw: u16, ch: u16, iw: u16, ih: u16) -> bool {
    let (iw, ih) = (dimension(iw), dimension(ih));
    let fit = fit_image(dimension(cw), dimension(ch), iw, ih).unwrap();
    let expected = iw / ih;
    ((fit.width / fit.height) - expected).abs() <= TOLERANCE * expected.max(1.0)
}

#[quickcheck]
fn fit_touches_one_edge_and_centres_the_other(cw: u16, ch: u16, iw: u16, ih: u16) -> bool {
    let (cw, ch) = (dimension(cw), dimension(ch));
    let fit = fit_image(cw, ch, dimension(iw), dimension(ih)).unwrap();

    let height_limited = fit.height == ch
        && fit.start_y == 0.0
        && (fit.start_x - (cw - fit.width) / 2.0).abs() <= TOLERANCE;
    let width_limited = fit.width == cw
        && fit.start_x == 0.0
        && (fit.start_y - (ch - fit.height) / 2.0).abs() <= TOLERANCE;
    height_limited || width_limited
}

#[quickcheck]
fn square_canvas_splits_on_orientation(side: u16, iw: u16, ih: u16) -> bool {
    let side = dimension(side);
    let (iw, ih) = (dimension(iw), dimension(ih));
    let fit = fit_image(side, side, iw, ih).unwrap();

    if iw / ih < 1.0 {
        fit.height == side && fit.start_y == 0.0
    } else {
        fit.width == side && fit.start_x == 0.0
    }
}

#[quickcheck]
fn fit_is_deterministic(cw: u16, ch: u16, iw: u16, ih: u16) -> bool {
    let args = (dimension(cw), dimension(ch), dimension(iw), dimension(ih));
    fit_image(args.0, args.1, args.2, args.3) == fit_image(args.0, args.1, args.2, args.3)
}

#[quickcheck]
fn non_positive_dimensions_are_rejected(value: f64, slot: u8) -> TestResult {
    if value > 0.0 && value.is_finite() {
        return TestResult::discard();
    }
    let mut args = [400.0, 400.0, 300.0, 200.0];
    args[(slot % 4) as usize] = value;
    let result = fit_image(args[0], args[1], args[2], args[3]);
    TestResult::from_bool(matches!(result, Err(MemeError::InvalidDimension { .. })))
}

#[test]
fn reference_examples() {
    let landscape = fit_image(400.0, 400.0, 800.0, 400.0).unwrap();
    assert_eq!(
        (landscape.width, landscape.height, landscape.start_x, landscape.start_y),
        (400.0, 200.0, 0.0, 100.0)
    );

    let portrait = fit_image(400.0, 400.0, 200.0, 800.0).unwrap();
    assert_eq!(
        (portrait.width, portrait.height, portrait.start_x, portrait.start_y),
        (100.0, 400.0, 150.0, 0.0)
    );

    let square = fit_image(400.0, 400.0, 400.0, 400.0).unwrap();
    assert_eq!(
        (square.width, square.height, square.start_x, square.start_y),
        (400.0, 400.0, 0.0, 0.0)
    );
}
