//! Wavefront OBJ parsing and coordinate normalization.
//!
//! Only the `v` and `f` record kinds are consumed; everything else
//! (comments, normals, texture coordinates, material directives) is skipped.
//! Face corners may carry `/`-separated texture/normal components; only the
//! leading vertex index is used.

use std::path::Path;
use std::str::SplitWhitespace;

use crate::error::ArcviewError;
use crate::mesh::MeshData;

/// Parse an OBJ document into flat vertex/index buffers.
///
/// Vertex coordinates are remapped into `[-1, 1]` using a single min/max
/// pooled across all three axes, so the mesh is scaled uniformly into the
/// canonical cube. Quad faces are fan-split from their first corner;
/// triangle faces pass through unchanged.
///
/// # Errors
///
/// - [`ArcviewError::ObjParse`] for a non-numeric token where a number is
///   expected, or a face index outside `[1, vertex_count]`.
/// - [`ArcviewError::UnsupportedFace`] for a face with a corner count other
///   than 3 or 4.
/// - [`ArcviewError::DegenerateMesh`] when every coordinate coincides and
///   normalization would divide by zero.
pub fn parse_obj(text: &str) -> Result<MeshData, ArcviewError> {
    let mut vertices: Vec<f32> = Vec::new();
    // Each index remembers the line of its face record so range errors,
    // which are only checkable after all vertices are in, still point at
    // the offending record.
    let mut indices: Vec<(u32, usize)> = Vec::new();
    let mut skipped = 0usize;

    for (idx, record) in text.lines().enumerate() {
        let line = idx + 1;
        let mut tokens = record.split_whitespace();
        match tokens.next() {
            Some("v") => parse_vertex(tokens, line, &mut vertices)?,
            Some("f") => parse_face(tokens, line, &mut indices)?,
            // Permissive by design: unknown record kinds and blank lines
            // are not errors.
            _ => skipped += 1,
        }
    }

    let vertex_count = (vertices.len() / 3) as u32;
    for &(index, line) in &indices {
        if index >= vertex_count {
            return Err(ArcviewError::ObjParse {
                line,
                message: format!(
                    "face index {} out of range (mesh has {vertex_count} \
                     vertices)",
                    index + 1
                ),
            });
        }
    }
    let indices: Vec<u32> =
        indices.into_iter().map(|(index, _)| index).collect();

    normalize_vertices(&mut vertices)?;

    log::debug!(
        "parsed OBJ: {} vertices, {} triangles, {skipped} lines skipped",
        vertices.len() / 3,
        indices.len() / 3,
    );

    Ok(MeshData { vertices, indices })
}

/// Read an OBJ file from disk and parse it.
///
/// # Errors
///
/// [`ArcviewError::Io`] if the file cannot be read, plus everything
/// [`parse_obj`] returns.
pub fn load_obj<P: AsRef<Path>>(path: P) -> Result<MeshData, ArcviewError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let mesh = parse_obj(&text)?;
    log::info!(
        "loaded {}: {} vertices, {} triangles",
        path.display(),
        mesh.vertex_count(),
        mesh.triangle_count(),
    );
    Ok(mesh)
}

/// Parse the coordinate tokens of a `v` record, appending in file order.
fn parse_vertex(
    tokens: SplitWhitespace<'_>,
    line: usize,
    vertices: &mut Vec<f32>,
) -> Result<(), ArcviewError> {
    for token in tokens {
        let value: f32 =
            token.parse().map_err(|_| ArcviewError::ObjParse {
                line,
                message: format!("invalid vertex coordinate '{token}'"),
            })?;
        vertices.push(value);
    }
    Ok(())
}

/// Parse the corner tokens of an `f` record, triangulating quads.
fn parse_face(
    tokens: SplitWhitespace<'_>,
    line: usize,
    indices: &mut Vec<(u32, usize)>,
) -> Result<(), ArcviewError> {
    let mut corners: Vec<u32> = Vec::with_capacity(4);
    for token in tokens {
        corners.push(parse_corner(token, line)?);
    }

    let triangulated: Vec<u32> = match corners.len() {
        3 => corners,
        // Fan split from corner 0: (a,b,c,d) -> (a,b,c), (a,c,d).
        4 => vec![
            corners[0], corners[1], corners[2], corners[0], corners[2],
            corners[3],
        ],
        n => return Err(ArcviewError::UnsupportedFace { line, corners: n }),
    };
    indices.extend(triangulated.into_iter().map(|index| (index, line)));
    Ok(())
}

/// Parse one `vertex[/texture[/normal]]` corner token down to a zero-based
/// vertex index. Texture and normal components are ignored.
fn parse_corner(token: &str, line: usize) -> Result<u32, ArcviewError> {
    let vertex_component =
        token.split('/').next().unwrap_or_default();
    let index: u32 =
        vertex_component
            .parse()
            .map_err(|_| ArcviewError::ObjParse {
                line,
                message: format!("invalid face index '{token}'"),
            })?;
    if index == 0 {
        return Err(ArcviewError::ObjParse {
            line,
            message: "face index 0 (OBJ indices are 1-based)".to_owned(),
        });
    }
    Ok(index - 1)
}

/// Remap every coordinate into `[-1, 1]` using a min/max pooled across all
/// axes. Seeding from the first coordinate (not zero) keeps all-positive
/// and all-negative meshes from stretching against a phantom origin.
fn normalize_vertices(vertices: &mut [f32]) -> Result<(), ArcviewError> {
    let Some(&first) = vertices.first() else {
        return Ok(());
    };

    let mut min = first;
    let mut max = first;
    for &coord in vertices.iter() {
        min = min.min(coord);
        max = max.max(coord);
    }

    let extent = max - min;
    if extent == 0.0 {
        return Err(ArcviewError::DegenerateMesh);
    }

    for coord in vertices {
        *coord = 2.0 * ((*coord - min) / extent) - 1.0;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::parse_obj;
    use crate::error::ArcviewError;

    #[test]
    fn test_triangle_scenario() {
        let mesh =
            parse_obj("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n").unwrap();
        assert_eq!(mesh.indices, vec![0, 1, 2]);
        assert_eq!(mesh.vertex_count(), 3);
        // Pooled min 0, max 1: 0 -> -1, 1 -> 1.
        assert_eq!(
            mesh.vertices,
            vec![-1.0, -1.0, -1.0, 1.0, -1.0, -1.0, -1.0, 1.0, -1.0]
        );
    }

    #[test]
    fn test_quad_fan_split() {
        let text = "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\n\
                    f 1/1/1 2/2/2 3/3/3 4/4/4\n";
        let mesh = parse_obj(text).unwrap();
        assert_eq!(mesh.indices, vec![0, 1, 2, 0, 2, 3]);
    }

    #[test]
    fn test_corner_tokens_keep_only_vertex_component() {
        let text = "v 0 0 0\nv 2 0 0\nv 0 2 0\nf 1/7/9 2//3 3/5\n";
        let mesh = parse_obj(text).unwrap();
        assert_eq!(mesh.indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_unknown_records_are_skipped() {
        let text = "# a comment\no cube\nvn 0 0 1\nvt 0.5 0.5\n\
                    mtllib cube.mtl\nusemtl steel\ns off\n\n\
                    v 0 0 0\nv 3 0 0\nv 0 3 0\nf 1 2 3\n";
        let mesh = parse_obj(text).unwrap();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
    }

    #[test]
    fn test_vertex_values_in_file_order() {
        let mesh = parse_obj("v 5 6 7\nv -5 0 2\n").unwrap();
        assert_eq!(mesh.vertex_count(), 2);
        // Before normalization: [5,6,7,-5,0,2]; pooled min -5, max 7.
        let expected: Vec<f32> = [5.0f32, 6.0, 7.0, -5.0, 0.0, 2.0]
            .iter()
            .map(|c| 2.0 * ((c + 5.0) / 12.0) - 1.0)
            .collect();
        for (got, want) in mesh.vertices.iter().zip(&expected) {
            assert!((got - want).abs() < 1e-6);
        }
    }

    #[test]
    fn test_normalization_bounds_and_midpoint() {
        let mesh = parse_obj("v 2 4 6\nv 10 8 3\nv 2.5 9 5\n").unwrap();
        for &coord in &mesh.vertices {
            assert!((-1.0..=1.0).contains(&coord));
        }
        // Pooled min 2, max 10: the midpoint value 6 maps to 0.
        assert!((mesh.vertices[2] - 0.0).abs() < 1e-6);
    }

    #[test]
    fn test_all_positive_mesh_fills_the_cube() {
        // With a zero-seeded scan this would squash into (0, 1]; seeding
        // from the first coordinate keeps the true minimum.
        let mesh = parse_obj("v 10 10 10\nv 20 20 20\n").unwrap();
        assert_eq!(mesh.vertices, vec![-1.0, -1.0, -1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_normalization_idempotent() {
        let text = "v -1 0 0\nv 1 0.25 -0.5\n";
        let once = parse_obj(text).unwrap();
        for (got, want) in once
            .vertices
            .iter()
            .zip(&[-1.0f32, 0.0, 0.0, 1.0, 0.25, -0.5])
        {
            assert!((got - want).abs() < 1e-6);
        }
    }

    #[test]
    fn test_bad_float_aborts_import() {
        let err = parse_obj("v 0 zero 0\n").unwrap_err();
        assert!(matches!(err, ArcviewError::ObjParse { line: 1, .. }));
    }

    #[test]
    fn test_bad_face_index_aborts_import() {
        let err = parse_obj("v 0 0 0\nf 1 x 2\n").unwrap_err();
        assert!(matches!(err, ArcviewError::ObjParse { line: 2, .. }));
    }

    #[test]
    fn test_ngon_face_is_unsupported() {
        let text = "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nv 0 0 1\n\
                    f 1 2 3 4 5\n";
        let err = parse_obj(text).unwrap_err();
        assert!(matches!(
            err,
            ArcviewError::UnsupportedFace { line: 6, corners: 5 }
        ));
    }

    #[test]
    fn test_out_of_range_index_rejected() {
        let err = parse_obj("v 0 0 0\nv 1 1 1\nf 1 2 3\n").unwrap_err();
        assert!(matches!(err, ArcviewError::ObjParse { .. }));
    }

    #[test]
    fn test_zero_index_rejected() {
        let err = parse_obj("v 0 0 0\nv 1 1 1\nv 2 2 2\nf 0 1 2\n")
            .unwrap_err();
        assert!(matches!(err, ArcviewError::ObjParse { line: 4, .. }));
    }

    #[test]
    fn test_degenerate_mesh_rejected() {
        let err = parse_obj("v 3 3 3\nv 3 3 3\n").unwrap_err();
        assert!(matches!(err, ArcviewError::DegenerateMesh));
    }

    #[test]
    fn test_empty_input_is_an_empty_mesh() {
        let mesh = parse_obj("").unwrap();
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
    }
}
