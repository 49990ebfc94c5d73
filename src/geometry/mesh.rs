//! Model that contains one or more triangles.

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::SceneError;
use crate::geometry::Triangle;
use crate::material::Material;
use crate::vec3::Vec3;

/// Polygonal model read from a plain text file.
///
/// Each non-empty line is a record:
///
/// * `p x y z` declares a vertex;
/// * `l i j k ...` declares a polygon by 1-based vertex indices.
///
/// Files are authored with y pointing down, so it is negated on load.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    points: Vec<Vec3<f64>>,
    polygons: Vec<Vec<usize>>,
}

impl Mesh {
    pub fn new(points: Vec<Vec3<f64>>, polygons: Vec<Vec<usize>>) -> Self {
        Self { points, polygons }
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SceneError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|err| SceneError::io(path, err))?;

        let mesh = Self::parse(&text, path)?;
        debug!(
            "loaded mesh {}: {} vertices, {} polygons",
            path.display(),
            mesh.points.len(),
            mesh.polygons.len()
        );

        Ok(mesh)
    }

    fn parse(text: &str, path: &Path) -> Result<Self, SceneError> {
        let mut mesh = Mesh::default();

        for (n, line) in text.lines().enumerate() {
            let syntax = |message: String| SceneError::MeshSyntax {
                path: path.to_path_buf(),
                line: n + 1,
                message,
            };

            let mut fields = line.split_whitespace();
            let kind = match fields.next() {
                Some(kind) => kind,
                None => continue,
            };

            match kind {
                "p" => {
                    let coords = fields
                        .map(|v| v.parse::<f64>())
                        .collect::<Result<Vec<_>, _>>()
                        .map_err(|err| syntax(err.to_string()))?;
                    match coords[..] {
                        [x, y, z] => mesh.points.push(Vec3::new(x, -y, z)),
                        _ => return Err(syntax(format!("expected 3 coordinates, got {}", coords.len()))),
                    }
                }
                "l" => {
                    let polygon = fields
                        .map(|v| match v.parse::<usize>() {
                            Ok(0) => Err("vertex indices start at 1".to_string()),
                            Ok(i) => Ok(i - 1),
                            Err(err) => Err(err.to_string()),
                        })
                        .collect::<Result<Vec<_>, _>>()
                        .map_err(syntax)?;
                    if polygon.len() < 3 {
                        return Err(syntax(format!("polygon needs at least 3 vertices, got {}", polygon.len())));
                    }
                    mesh.polygons.push(polygon);
                }
                other => return Err(syntax(format!("unknown record `{}`", other))),
            }
        }

        mesh.validate(path)?;

        Ok(mesh)
    }

    fn validate(&self, path: &Path) -> Result<(), SceneError> {
        let count = self.points.len();
        match self.polygons.iter().flatten().find(|&&i| i >= count) {
            Some(&index) => Err(SceneError::MeshIndex {
                path: path.to_path_buf(),
                index: index + 1,
                count,
            }),
            None => Ok(()),
        }
    }

    /// Fan-triangulates every polygon around its first vertex, placing each vertex at
    /// `v · scale + center`.
    ///
    /// Polygons referring to undeclared vertices are skipped.
    pub fn triangles(&self, center: Vec3<f64>, scale: f64, material: Material) -> Vec<Triangle> {
        let mut triangles = Vec::new();

        for polygon in &self.polygons {
            let placed = polygon
                .iter()
                .map(|&i| self.points.get(i).map(|v| v.scale(scale) + center))
                .collect::<Option<Vec<_>>>();

            let placed = match placed {
                Some(placed) => placed,
                None => continue,
            };

            if let Some((&origin, rest)) = placed.split_first() {
                triangles.extend(
                    rest.windows(2)
                        .map(|pair| Triangle::new([origin, pair[0], pair[1]], material)),
                );
            }
        }

        triangles
    }
}

#[cfg(test)]
mod test {
    use std::path::Path;

    use super::*;

    const SQUARE: &str = "
p 0 0 0
p 1 0 0
p 1 1 0

p 0 1 0
l 1 2 3 4
";

    fn parse(text: &str) -> Result<Mesh, SceneError> {
        Mesh::parse(text, Path::new("test.txt"))
    }

    #[test]
    fn parse_points_and_polygons() {
        let mesh = parse(SQUARE).unwrap();

        assert_eq!(
            Mesh::new(
                vec![
                    Vec3::new(0.0, -0.0, 0.0),
                    Vec3::new(1.0, -0.0, 0.0),
                    Vec3::new(1.0, -1.0, 0.0),
                    Vec3::new(0.0, -1.0, 0.0),
                ],
                vec![vec![0, 1, 2, 3]],
            ),
            mesh
        );
    }

    #[test]
    fn fan_triangulation() {
        let mesh = parse(SQUARE).unwrap();
        let triangles = mesh.triangles(Vec3::new(10.0, 0.0, 0.0), 2.0, Material::new(Vec3::ONE));

        assert_eq!(2, triangles.len());
        assert_eq!(
            &[Vec3::new(10.0, 0.0, 0.0), Vec3::new(12.0, 0.0, 0.0), Vec3::new(12.0, -2.0, 0.0)],
            triangles[0].vertices()
        );
        assert_eq!(
            &[Vec3::new(10.0, 0.0, 0.0), Vec3::new(12.0, -2.0, 0.0), Vec3::new(10.0, -2.0, 0.0)],
            triangles[1].vertices()
        );
    }

    #[test]
    fn skip_polygons_with_undeclared_vertices() {
        let mesh = Mesh::new(
            vec![Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0)],
            vec![vec![0, 1, 2], vec![0, 1, 7], vec![], vec![2]],
        );

        let triangles = mesh.triangles(Vec3::ZERO, 1.0, Material::new(Vec3::ONE));
        assert_eq!(1, triangles.len());
        assert_eq!(
            &[Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0)],
            triangles[0].vertices()
        );
    }

    #[test]
    fn reject_bad_coordinates() {
        match parse("p 1 2\n") {
            Err(SceneError::MeshSyntax { line, .. }) => assert_eq!(1, line),
            other => panic!("unexpected result: {:?}", other),
        }
        match parse("p 1 2 3\np 1 x 3\n") {
            Err(SceneError::MeshSyntax { line, .. }) => assert_eq!(2, line),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn reject_unknown_vertex() {
        match parse("p 0 0 0\np 1 0 0\np 0 1 0\nl 1 2 4\n") {
            Err(SceneError::MeshIndex { index, count, .. }) => {
                assert_eq!(4, index);
                assert_eq!(3, count);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn reject_zero_index() {
        assert!(matches!(parse("l 0 1 2\n"), Err(SceneError::MeshSyntax { .. })));
    }
}
