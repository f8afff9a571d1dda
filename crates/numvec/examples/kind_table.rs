//! Logs the per-kind capability table and a few kind-specific operations.
//!
//! Set `RUST_LOG` to override the default `debug` level.

use std::env;

use log::LevelFilter;
use numvec::{vec2, vec4, Cross, Scalar, ScalarKind, Vector, Widen};

fn init_logger() {
    env_logger::Builder::new()
        .filter(Some(env!("CARGO_CRATE_NAME")), LevelFilter::Debug)
        .filter(Some("numvec"), LevelFilter::Debug)
        .parse_default_env()
        .try_init()
        .ok();
}

fn widen_demo<T: Widen + Cross>(v: Vector<T, 2>, other: Vector<T, 2>) {
    log::debug!(
        "{}: {v:?} widens to {} {:?}",
        T::KIND,
        <T::Wide as Scalar>::KIND,
        v.widen(),
    );
    cross_demo(v, other);
}

fn cross_demo<T: Cross>(v: Vector<T, 2>, other: Vector<T, 2>) {
    log::debug!("{}: {v:?} cross {other:?} = {:?}", T::KIND, v.cross(other));
}

fn main() -> anyhow::Result<()> {
    init_logger();

    log::info!("{:<8} {:>4} {:>6} {:>8} {:>6}", "kind", "bits", "signed", "fraction", "wide");
    for kind in ScalarKind::ALL {
        let wide = match kind.preferred_wide() {
            Some(wide) => wide.to_string(),
            None => "-".to_string(),
        };
        log::info!(
            "{:<8} {:>4} {:>6} {:>8} {:>6}",
            kind,
            kind.bits(),
            kind.is_signed(),
            kind.has_fraction(),
            wide,
        );
    }

    widen_demo(vec2(100i8, 1), vec2(1, 100));
    widen_demo(vec2(200u8, 3), vec2(2, 250));
    widen_demo(vec2(40_000u16, 7), vec2(3, 1));
    widen_demo(vec2(i64::MAX, 2), vec2(2, 1));
    cross_demo(vec2(1.5f32, -2.0), vec2(0.5, 4.0));

    let input = env::args().nth(1).unwrap_or_else(|| "(-0.5, 0.5, 1.5, 2.75)".to_string());
    let mut v: Vector<f64, 4> = input.parse()?;
    let original = v;
    v.saturate();
    log::info!("saturate {original} = {v}");

    let mut v = original;
    v.floor();
    log::info!("floor {original} = {v}");

    let mut v = original;
    v.ceil();
    log::info!("ceil {original} = {v}");

    let v = vec4(1u8, 2, 3, 4);
    let bytes: &[u8] = bytemuck::bytes_of(&v);
    log::debug!("Vec4<u8> as bytes: {bytes:?}");

    Ok(())
}
