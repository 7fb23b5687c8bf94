use crate::mat4::Mat4;
use crate::vector::Vec3;

pub fn assert_vec3_eq(is: Vec3, should: Vec3, margin: f32) {
    for (i, (a, b)) in [(is.x, should.x), (is.y, should.y), (is.z, should.z)]
        .iter()
        .enumerate()
    {
        assert!(
            (a - b).abs() <= margin,
            "is: {:?} should: {:?} (+- {:?}) @ component {}",
            is,
            should,
            margin,
            i
        );
    }
}

pub fn assert_mat4_eq(is: &Mat4, should: &Mat4, margin: f32) {
    for row in 0..4 {
        for col in 0..4 {
            let (a, b) = (is.get(row, col), should.get(row, col));
            assert!(
                (a - b).abs() <= margin,
                "is: {:?} should: {:?} (+- {:?}) @ ({}, {})",
                a,
                b,
                margin,
                row,
                col
            );
        }
    }
}
