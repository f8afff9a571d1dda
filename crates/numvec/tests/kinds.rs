//! Kind-specific behavior exercised through the public API only.

use approx::assert_relative_eq;
use numvec::*;

#[test]
fn narrow_cross_wraps() {
    assert_eq!(vec2(100i8, 1).cross(vec2(1, 100)), 15);
    assert_eq!(vec2(1i8, 100).cross(vec2(100, 1)), -15);
    assert_eq!(vec2(16u8, 0).cross(vec2(0, 16)), 0);
    assert_eq!(vec2(300i16, 0).cross(vec2(0, 300)), 90_000i32 as i16);
}

#[test]
fn wide_cross_is_native() {
    assert_eq!(vec2(3i32, 4).cross(vec2(5, 6)), -2);
    assert_eq!(vec2(3u64, 4).cross(vec2(5, 6)), 2u64.wrapping_neg());
    assert_eq!(vec2(2.0f64, 0.0).cross(vec2(0.0, 3.0)), 6.0);
    assert_eq!(Vec3i::X.cross(Vec3i::Y), Vec3i::Z);
}

#[test]
fn saturate() {
    let mut v = vec4(-0.5f32, 0.5, 1.5, f32::NAN);
    v.saturate();
    assert_eq!(v.truncate(), vec3(0.0, 0.5, 1.0));
    assert!(v.w.is_nan());
}

#[test]
fn floor_ceil() {
    let mut v = vec4(2.0f64, -2.0, 2.5, -2.5);
    v.floor();
    assert_eq!(v, vec4(2.0, -2.0, 2.0, -3.0));

    let mut v = vec4(2.0f32, -2.0, 2.5, -2.5);
    v.ceil();
    assert_eq!(v, vec4(2.0, -2.0, 3.0, -2.0));
}

#[test]
fn widen() {
    let v: Vec2f = vec2(7u8, 0).into();
    assert_eq!(v, vec2(7.0, 0.0));
    assert_eq!(vec4(1i16, -2, 3, -4).widen(), vec4(1.0f32, -2.0, 3.0, -4.0));
    assert_eq!(vec2(u32::MAX, 0).widen(), vec2(4294967296.0f32, 0.0));
    assert_eq!(vec3(1i64 << 53, 1, 2).widen(), vec3(9007199254740992.0f64, 1.0, 2.0));

    let h = vec2(f16::from_f32(0.5), f16::from_f32(-1.25));
    assert_eq!(h.widen(), vec2(0.5f32, -1.25));
}

#[test]
fn widened_kind_matches_table() {
    fn check<T: Widen, const N: usize>(v: Vector<T, N>) {
        let wide = v.widen();
        assert_eq!(element_kind(&wide), T::KIND.preferred_wide().unwrap());
    }

    fn element_kind<T: Scalar, const N: usize>(_: &Vector<T, N>) -> ScalarKind {
        T::KIND
    }

    check(vec2(1u8, 2));
    check(vec4(1u8, 2, 3, 4));
    check(vec2(1i32, 2));
    check(vec4(1i32, 2, 3, 4));
    check(vec2(1u64, 2));
    check(vec4(1u64, 2, 3, 4));
    check(vec2(1usize, 2));
    check(vec4(1isize, 2, 3, 4));
    check(Vec2h::X);
    check(Vec4h::W);
}

#[test]
fn geometry() {
    let v = vec3(3.0f64, 4.0, 12.0);
    assert_eq!(v.length(), 13.0);
    assert_relative_eq!(v.normalize().length(), 1.0);
    assert_relative_eq!(v.normalize(), vec3(3.0 / 13.0, 4.0 / 13.0, 12.0 / 13.0));
    assert_eq!(v.dot(Vec3d::Z), 12.0);
}

#[test]
fn parse_and_display() {
    let v: Vec3i = "(1, -2, 3)".parse().unwrap();
    assert_eq!(v, vec3(1, -2, 3));
    assert_eq!(v.to_string().parse::<Vec3i>().unwrap(), v);

    let d: Vec2<Decimal> = "(0.1, 0.2)".parse().unwrap();
    assert_eq!(d.x + d.y, "0.3".parse::<Decimal>().unwrap());

    assert_eq!(
        "(1, 2)".parse::<Vec3i>(),
        Err(VectorError::Length { expected: 3, found: 2 })
    );
    assert_eq!("1, 2".parse::<Vec2i>(), Err(VectorError::MissingParens));
}

#[test]
fn slices() {
    let data = [1.0f32, 2.0, 3.0, 4.0, 5.0];
    let v = Vec4f::try_from(&data[1..]).unwrap();
    assert_eq!(v, vec4(2.0, 3.0, 4.0, 5.0));
    assert_eq!(
        Vec4f::try_from(&data[..]),
        Err(VectorError::Length { expected: 4, found: 5 })
    );
}
