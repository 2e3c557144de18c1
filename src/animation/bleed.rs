use crate::{
    animation::{frame::MAX_FRAMES, interp::Interp},
    foundation::{
        color::Rgb,
        error::{KbanimError, KbanimResult},
    },
};

/// Gradient from `orig` to `dest` over `steps` steps (`steps + 1` colors, endpoints included).
///
/// Unspecified or fewer than two steps yields a single color: the midpoint sample (step 1 of 2).
/// Callers use `bleed(a, b, None, Interp::Linear)[0]` as "the average of a and b".
pub fn bleed(orig: Rgb, dest: Rgb, steps: Option<usize>, interp: Interp) -> Vec<Rgb> {
    match steps {
        Some(steps) if steps >= 2 => gradient(orig, dest, steps, interp).collect(),
        _ => vec![sample(orig, dest, 1, 2, interp)],
    }
}

/// Cyclic gradient through `colors`, closing back onto `colors[0]`.
///
/// Each consecutive pair (including last -> first) bleeds over `steps_per_segment` steps. Segment
/// boundaries are not repeated and the closing sample is dropped, so the sequence holds exactly
/// `colors.len() * steps_per_segment` colors and starts at `colors[0]`. Samples are computed on
/// iteration.
pub fn multi_bleed(
    steps_per_segment: usize,
    interp: Interp,
    colors: &[Rgb],
) -> KbanimResult<impl Iterator<Item = Rgb> + Clone + '_> {
    if colors.len() < 2 {
        return Err(KbanimError::validation(format!(
            "multi bleed needs at least 2 colors, got {}",
            colors.len()
        )));
    }
    if steps_per_segment == 0 {
        return Err(KbanimError::validation(
            "multi bleed steps per segment must be > 0",
        ));
    }

    let n = colors.len();
    let total = n
        .checked_mul(steps_per_segment)
        .filter(|total| *total <= MAX_FRAMES)
        .ok_or_else(|| {
            KbanimError::validation(format!(
                "multi bleed of {n} colors x {steps_per_segment} steps exceeds {MAX_FRAMES} samples"
            ))
        })?;
    Ok((0..n)
        .flat_map(move |seg| {
            let from = colors[seg];
            let to = colors[(seg + 1) % n];
            let first = usize::from(seg > 0);
            (first..=steps_per_segment)
                .map(move |step| sample(from, to, step, steps_per_segment, interp))
        })
        .take(total))
}

pub(crate) fn gradient(
    orig: Rgb,
    dest: Rgb,
    steps: usize,
    interp: Interp,
) -> impl Iterator<Item = Rgb> {
    (0..=steps).map(move |step| sample(orig, dest, step, steps, interp))
}

fn sample(orig: Rgb, dest: Rgb, step: usize, total: usize, interp: Interp) -> Rgb {
    let ch = |a: u8, b: u8| interp.sample(step, total, f64::from(a), f64::from(b));
    Rgb::from_f64(ch(orig.r, dest.r), ch(orig.g, dest.g), ch(orig.b, dest.b))
}

#[cfg(test)]
#[path = "../../tests/unit/animation/bleed.rs"]
mod tests;
