//! Hardcoded tetrahedron geometry: 4 vertices, 4 triangular faces.

use whirl_engine::render::MeshVertex;

pub const TETRA_VERTICES: [MeshVertex; 4] = [
    MeshVertex { position: [0.0, 0.5, 0.0], color: [1.0, 0.0, 0.0] },   // apex
    MeshVertex { position: [-0.5, -0.5, 0.5], color: [0.0, 1.0, 0.0] },
    MeshVertex { position: [0.5, -0.5, 0.5], color: [0.0, 0.0, 1.0] },
    MeshVertex { position: [0.0, -0.5, -0.5], color: [1.0, 1.0, 0.0] },
];

pub const TETRA_INDICES: [u16; 12] = [
    0, 1, 2, // front face
    0, 2, 3, // right face
    0, 3, 1, // left face
    1, 2, 3, // bottom face
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_sequence_covers_four_triangles() {
        assert_eq!(TETRA_INDICES.len(), 12);
    }

    #[test]
    fn all_indices_reference_existing_vertices() {
        for &i in &TETRA_INDICES {
            assert!((i as usize) < TETRA_VERTICES.len(), "index {i} out of range");
        }
    }

    #[test]
    fn faces_are_non_degenerate() {
        for face in TETRA_INDICES.chunks_exact(3) {
            assert!(face[0] != face[1] && face[1] != face[2] && face[0] != face[2]);
        }
    }

    #[test]
    fn every_vertex_is_used() {
        for v in 0..TETRA_VERTICES.len() as u16 {
            assert!(TETRA_INDICES.contains(&v), "vertex {v} unreferenced");
        }
    }
}
