//! Face-matching engine: a linear nearest-neighbor scan over stored
//! descriptors. No indexing and no approximate search; the candidate set is
//! the user table, which is small by construction.

use crate::model::user::User;

/// Matches with a best distance above this value are rejected.
pub const FACE_MATCH_THRESHOLD: f64 = 0.6;

/// Euclidean distance between two descriptors. Vectors of different lengths
/// can never describe the same face, so the distance is reported as
/// infinite.
pub fn euclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() {
        return f64::INFINITY;
    }
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f64>()
        .sqrt()
}

#[derive(Debug)]
pub struct FaceMatch<'a> {
    pub user: &'a User,
    pub distance: f64,
}

impl FaceMatch<'_> {
    /// UI-friendly scalar, not a calibrated probability. Negative when the
    /// distance exceeds 1.
    pub fn confidence(&self) -> f64 {
        1.0 - self.distance
    }
}

/// Finds the candidate minimizing Euclidean distance to `query`. Candidates
/// without a stored descriptor are skipped. Only a strictly smaller distance
/// replaces the current best, so on ties the first candidate in input order
/// wins. Returns `None` when nothing qualifies or the best distance exceeds
/// [`FACE_MATCH_THRESHOLD`].
pub fn best_match<'a>(query: &[f64], candidates: &'a [User]) -> Option<FaceMatch<'a>> {
    let mut best: Option<FaceMatch<'a>> = None;

    for user in candidates {
        let Some(descriptor) = user.face_descriptor.as_deref() else {
            continue;
        };
        let distance = euclidean_distance(query, descriptor);
        match &best {
            Some(found) if distance >= found.distance => {}
            _ => best = Some(FaceMatch { user, distance }),
        }
    }

    best.filter(|found| found.distance <= FACE_MATCH_THRESHOLD)
}
