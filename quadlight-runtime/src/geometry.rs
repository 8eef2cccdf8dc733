use bytemuck::{Pod, Zeroable};

#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub texcoord: [f32; 2],
}

impl Vertex {
    pub const STRIDE: u32 = std::mem::size_of::<Vertex>() as u32;
    pub const POSITION_OFFSET: u32 = std::mem::offset_of!(Vertex, position) as u32;
    pub const TEXCOORD_OFFSET: u32 = std::mem::offset_of!(Vertex, texcoord) as u32;

    const fn new(x: f32, y: f32, u: f32, v: f32) -> Vertex {
        Vertex {
            position: [x, y, 0.0],
            texcoord: [u, v],
        }
    }
}

/// A unit quad centred on the origin, as two clockwise triangles.
pub const QUAD_VERTICES: &[Vertex; 6] = &[
    Vertex::new(-0.5, 0.5, 0.0, 0.0),
    Vertex::new(0.5, 0.5, 1.0, 0.0),
    Vertex::new(0.5, -0.5, 1.0, 1.0),
    Vertex::new(-0.5, 0.5, 0.0, 0.0),
    Vertex::new(0.5, -0.5, 1.0, 1.0),
    Vertex::new(-0.5, -0.5, 0.0, 1.0),
];

pub const QUAD_VERTEX_COUNT: u32 = QUAD_VERTICES.len() as u32;

#[cfg(test)]
mod test {
    use super::*;

    fn signed_area(a: &Vertex, b: &Vertex, c: &Vertex) -> f32 {
        let [ax, ay, _] = a.position;
        let [bx, by, _] = b.position;
        let [cx, cy, _] = c.position;
        (bx - ax) * (cy - ay) - (by - ay) * (cx - ax)
    }

    #[test]
    fn vertex_layout() {
        assert_eq!(Vertex::STRIDE, 20);
        assert_eq!(Vertex::POSITION_OFFSET, 0);
        assert_eq!(Vertex::TEXCOORD_OFFSET, 12);
        assert_eq!(bytemuck::cast_slice::<Vertex, u8>(QUAD_VERTICES).len(), 120);
    }

    #[test]
    fn quad_is_two_clockwise_triangles() {
        assert_eq!(QUAD_VERTEX_COUNT, 6);
        for triangle in QUAD_VERTICES.chunks(3) {
            // clockwise in a y-up plane has negative signed area
            assert!(signed_area(&triangle[0], &triangle[1], &triangle[2]) < 0.0);
        }
    }

    #[test]
    fn uvs_follow_positions() {
        for vertex in QUAD_VERTICES.iter() {
            let [x, y, z] = vertex.position;
            assert_eq!(z, 0.0);
            assert_eq!(vertex.texcoord, [x + 0.5, 0.5 - y]);
        }
    }
}
