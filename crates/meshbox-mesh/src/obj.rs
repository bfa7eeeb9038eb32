//! Minimal Wavefront OBJ reader.
//!
//! Parses `v` and `f` records into a [`TriMesh`]; everything else
//! (comments, normals, texture coordinates, material statements) is
//! skipped. Polygon faces are fan-triangulated.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use meshbox_core::{MeshboxError, Result};
use meshbox_math::Point3;

use crate::trimesh::TriMesh;

/// Read a mesh from an OBJ file.
pub fn read_obj<P: AsRef<Path>>(path: P) -> Result<TriMesh> {
    let file = File::open(path)?;
    parse_obj(BufReader::new(file))
}

/// Read only the vertex positions from an OBJ file.
pub fn load_points<P: AsRef<Path>>(path: P) -> Result<Vec<Point3>> {
    Ok(read_obj(path)?.positions)
}

fn parse_obj<R: BufRead>(reader: R) -> Result<TriMesh> {
    let mut mesh = TriMesh::default();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let lineno = i + 1;
        let mut tokens = line.split_whitespace();
        match tokens.next() {
            Some("v") => {
                let mut coords = [0.0f64; 3];
                for c in &mut coords {
                    let tok = tokens.next().ok_or_else(|| {
                        MeshboxError::Parse(format!("line {lineno}: vertex needs 3 coordinates"))
                    })?;
                    *c = tok.parse().map_err(|_| {
                        MeshboxError::Parse(format!("line {lineno}: bad coordinate '{tok}'"))
                    })?;
                }
                mesh.positions.push(Point3::from_array(coords));
            }
            Some("f") => {
                let mut face = Vec::with_capacity(4);
                for tok in tokens {
                    face.push(parse_face_index(tok, mesh.positions.len(), lineno)?);
                }
                if face.len() < 3 {
                    return Err(MeshboxError::Parse(format!(
                        "line {lineno}: face needs at least 3 vertices"
                    )));
                }
                for k in 1..face.len() - 1 {
                    mesh.indices
                        .extend_from_slice(&[face[0], face[k], face[k + 1]]);
                }
            }
            _ => {}
        }
    }

    Ok(mesh)
}

/// Resolve one `f` token (`i`, `i/t`, `i//n`, `i/t/n`) to a zero-based
/// vertex index. Negative indices count back from the vertices read so far.
fn parse_face_index(token: &str, vertex_count: usize, lineno: usize) -> Result<u32> {
    let head = token.split('/').next().unwrap_or(token);
    let idx: i64 = head.parse().map_err(|_| {
        MeshboxError::Parse(format!("line {lineno}: bad face index '{token}'"))
    })?;
    let resolved = match idx {
        0 => {
            return Err(MeshboxError::Parse(format!(
                "line {lineno}: face index 0 (OBJ indices are 1-based)"
            )))
        }
        i if i > 0 => i - 1,
        i => vertex_count as i64 + i,
    };
    if resolved < 0 || resolved >= vertex_count as i64 {
        return Err(MeshboxError::Parse(format!(
            "line {lineno}: face index '{token}' out of range"
        )));
    }
    Ok(resolved as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use meshbox_math::DVec3;

    fn parse(text: &str) -> Result<TriMesh> {
        parse_obj(text.as_bytes())
    }

    #[test]
    fn test_vertices_and_triangle() {
        let mesh = parse(
            "# a comment\n\
             v 0 0 0\n\
             v 1 0 0\n\
             v 0 1 0\n\
             f 1 2 3\n",
        )
        .unwrap();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.indices, vec![0, 1, 2]);
        assert_eq!(mesh.positions[1], DVec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_quad_is_fan_triangulated() {
        let mesh = parse(
            "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n",
        )
        .unwrap();
        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.indices, vec![0, 1, 2, 0, 2, 3]);
    }

    #[test]
    fn test_slash_forms_and_extra_records() {
        let mesh = parse(
            "v 0 0 0\nv 1 0 0\nv 0 1 0\n\
             vn 0 0 1\nvt 0 0\nusemtl stone\n\
             f 1/1/1 2//1 3/1\n",
        )
        .unwrap();
        assert_eq!(mesh.indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_negative_indices() {
        let mesh = parse("v 0 0 0\nv 1 0 0\nv 0 1 0\nf -3 -2 -1\n").unwrap();
        assert_eq!(mesh.indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_bad_coordinate_is_parse_error() {
        let err = parse("v 0 zero 0\n").unwrap_err();
        assert!(matches!(err, MeshboxError::Parse(_)));
    }

    #[test]
    fn test_short_vertex_is_parse_error() {
        assert!(parse("v 1 2\n").is_err());
    }

    #[test]
    fn test_face_index_out_of_range() {
        assert!(parse("v 0 0 0\nf 1 2 3\n").is_err());
    }

    #[test]
    fn test_zero_face_index_rejected() {
        assert!(parse("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 0 1 2\n").is_err());
    }

    #[test]
    fn test_degenerate_face_rejected() {
        assert!(parse("v 0 0 0\nv 1 0 0\nf 1 2\n").is_err());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = read_obj("definitely/not/here.obj").unwrap_err();
        assert!(matches!(err, MeshboxError::Io(_)));
    }
}
