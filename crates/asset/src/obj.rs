//! Minimal OBJ importer supporting positions, normals and polygon faces.
//!
//! The output is not indexed: every triangle corner becomes its own vertex,
//! which is what a plain `draw(0..n)` on two vertex buffers wants. Polygons
//! are fan-triangulated from their first corner, so only convex planar faces
//! come out right (the common case for exporters).

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use crate::{error::ObjError, mesh::MeshBuffers};

/// Normal used for every vertex when the file declares no `vn` at all.
pub const DEFAULT_NORMAL: [f32; 3] = [0.0, 1.0, 0.0];

/// What to do with a face corner that cannot be parsed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FacePolicy {
    /// Drop the corner, log a warning and triangulate the remaining ones.
    #[default]
    Skip,
    /// Fail the import with [`ObjError::MalformedFace`].
    Reject,
}

/// Configurable OBJ importer. The free functions below use the defaults.
#[derive(Clone, Copy, Debug, Default)]
pub struct ObjLoader {
    face_policy: FacePolicy,
}

impl ObjLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_face_policy(mut self, face_policy: FacePolicy) -> Self {
        self.face_policy = face_policy;
        self
    }

    pub fn load_path(&self, path: impl AsRef<Path>) -> Result<MeshBuffers, ObjError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ObjError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Importing OBJ from {}", path.display());
        self.load_reader(BufReader::new(file))
    }

    pub fn load_reader<R: BufRead>(&self, reader: R) -> Result<MeshBuffers, ObjError> {
        parse_obj(reader, self.face_policy)
    }

    pub fn load_str(&self, contents: &str) -> Result<MeshBuffers, ObjError> {
        parse_obj(io::Cursor::new(contents), self.face_policy)
    }
}

/// Load an OBJ mesh from a file path.
pub fn load_obj_from_path(path: impl AsRef<Path>) -> Result<MeshBuffers, ObjError> {
    ObjLoader::default().load_path(path)
}

/// Load an OBJ mesh from a [`BufRead`] implementation.
pub fn load_obj_from_reader<R: BufRead>(reader: R) -> Result<MeshBuffers, ObjError> {
    ObjLoader::default().load_reader(reader)
}

/// Convenience helper to parse an OBJ string literal.
pub fn load_obj_from_str(contents: &str) -> Result<MeshBuffers, ObjError> {
    ObjLoader::default().load_str(contents)
}

/// A 0-based index that has not been bounds-checked yet, plus the raw token
/// value for diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct IndexRef {
    raw: i64,
    index: i64,
}

#[derive(Clone, Copy, Debug)]
struct Corner {
    position: IndexRef,
    normal: IndexRef,
    line: usize,
}

fn parse_obj<R: BufRead>(mut reader: R, policy: FacePolicy) -> Result<MeshBuffers, ObjError> {
    let mut positions: Vec<[f32; 3]> = Vec::new();
    let mut normals: Vec<[f32; 3]> = Vec::new();
    // Triangle list, three corners per triangle.
    let mut corners: Vec<Corner> = Vec::new();
    let mut face: Vec<Corner> = Vec::new();
    let mut skipped = 0usize;

    let mut buf: Vec<u8> = Vec::new();
    let mut line_no = 0usize;
    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|source| ObjError::Read {
                line: line_no + 1,
                source,
            })?;
        if read == 0 {
            break;
        }
        line_no += 1;

        // Names and comments may carry any encoding; only the numeric
        // directives need to be valid text.
        let line = String::from_utf8_lossy(&buf);
        let content = line.split_once('#').map_or(&*line, |(head, _)| head);

        let mut parts = content.split_whitespace();
        let Some(tag) = parts.next() else {
            continue;
        };

        match tag {
            "v" => positions.push(parse_vec3(&mut parts, line_no, "v")?),
            "vn" => normals.push(parse_vec3(&mut parts, line_no, "vn")?),
            "f" => {
                let tokens: Vec<&str> = parts.collect();
                if tokens.len() < 3 {
                    log::debug!("Skipping degenerate face on line {line_no}");
                    continue;
                }

                face.clear();
                for token in tokens {
                    match parse_corner(token, positions.len(), normals.len()) {
                        Some((position, normal)) => face.push(Corner {
                            position,
                            normal,
                            line: line_no,
                        }),
                        None if policy == FacePolicy::Reject => {
                            return Err(ObjError::MalformedFace {
                                line: line_no,
                                token: token.to_owned(),
                            });
                        }
                        None => {
                            log::warn!("Dropping unparseable face reference '{token}' on line {line_no}");
                            skipped += 1;
                        }
                    }
                }

                if face.len() < 3 {
                    continue;
                }
                // Triangulate fan
                for t in 1..(face.len() - 1) {
                    corners.extend_from_slice(&[face[0], face[t], face[t + 1]]);
                }
            }
            _ => {
                // Ignore other directives (vt/o/g/s/usemtl/mtllib...)
            }
        }
    }

    if corners.is_empty() {
        return Err(ObjError::EmptyMesh);
    }

    // Normals are all-or-nothing across the file: either every corner looks
    // one up, or every vertex gets the default.
    let has_normals = !normals.is_empty();
    let mut mesh = MeshBuffers::with_capacity(corners.len());
    for corner in &corners {
        let position = lookup(&positions, corner.position, corner.line, "position")?;
        let normal = if has_normals {
            lookup(&normals, corner.normal, corner.line, "normal")?
        } else {
            DEFAULT_NORMAL
        };
        mesh.push(position, normal);
    }

    let center = mesh.recenter().ok_or(ObjError::EmptyMesh)?;
    log::info!(
        "OBJ imported: {} positions, {} normals, {} triangles, centered by {:?}",
        positions.len(),
        normals.len(),
        mesh.triangle_count(),
        center
    );
    if skipped > 0 {
        log::warn!("{skipped} face reference(s) were dropped");
    }

    Ok(mesh)
}

fn parse_vec3<'a>(
    parts: &mut impl Iterator<Item = &'a str>,
    line: usize,
    directive: &'static str,
) -> Result<[f32; 3], ObjError> {
    let mut out = [0.0f32; 3];
    for (axis, slot) in ["x", "y", "z"].into_iter().zip(out.iter_mut()) {
        let token = parts.next().ok_or_else(|| ObjError::MalformedDirective {
            line,
            directive,
            reason: format!("missing {axis} component"),
        })?;
        *slot = token
            .parse::<f32>()
            .map_err(|e| ObjError::MalformedDirective {
                line,
                directive,
                reason: format!("invalid {axis} component '{token}': {e}"),
            })?;
    }
    Ok(out)
}

/// Parse `p`, `p/t`, `p//n` or `p/t/n`. Without a normal slot the position
/// index doubles as the normal index.
fn parse_corner(token: &str, pos_count: usize, norm_count: usize) -> Option<(IndexRef, IndexRef)> {
    let mut slots = token.split('/');
    let position = resolve(parse_index(slots.next()?)?, pos_count);
    let tex = slots.next();
    let norm = slots.next();
    if slots.next().is_some() {
        return None;
    }

    // Texture coordinates are not used, but must still be well-formed.
    if let Some(t) = tex.filter(|t| !t.is_empty()) {
        parse_index(t)?;
    }

    let normal = match norm {
        Some(n) if !n.is_empty() => resolve(parse_index(n)?, norm_count),
        _ => position,
    };
    Some((position, normal))
}

fn parse_index(token: &str) -> Option<i64> {
    token.parse::<i64>().ok().filter(|&raw| raw != 0)
}

/// 1-based indices count from the start, negative ones from the end of what
/// has been declared so far.
fn resolve(raw: i64, len: usize) -> IndexRef {
    let index = if raw > 0 { raw - 1 } else { len as i64 + raw };
    IndexRef { raw, index }
}

fn lookup(
    list: &[[f32; 3]],
    idx: IndexRef,
    line: usize,
    kind: &'static str,
) -> Result<[f32; 3], ObjError> {
    usize::try_from(idx.index)
        .ok()
        .and_then(|i| list.get(i).copied())
        .ok_or(ObjError::IndexOutOfRange {
            line,
            kind,
            raw: idx.raw,
            len: list.len(),
        })
}
