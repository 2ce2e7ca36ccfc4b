//! Which clip to play and where to look for it.

use std::path::PathBuf;

use rand::Rng;

use crate::bucket::TimeBucket;

/// Clips recorded per bucket, numbered from 1.
pub const CLIPS_PER_BUCKET: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clip {
    pub bucket: TimeBucket,
    /// 1..=CLIPS_PER_BUCKET
    pub index: u8,
}

impl Clip {
    pub fn random<R: Rng + ?Sized>(bucket: TimeBucket, rng: &mut R) -> Self {
        Self {
            bucket,
            index: rng.gen_range(1..=CLIPS_PER_BUCKET),
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}_{}.mp3", self.bucket.prefix(), self.index)
    }
}

/// One place a clip may be loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipSource {
    Remote(String),
    Local(PathBuf),
}

impl ClipSource {
    pub fn describe(&self) -> String {
        match self {
            Self::Remote(url) => url.clone(),
            Self::Local(path) => path.display().to_string(),
        }
    }
}

impl std::fmt::Display for ClipSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.describe())
    }
}

/// Ordered candidates for a clip: every mirror in order, then the local directory.
pub fn candidate_sources(clip: &Clip, mirrors: &[String], local_dir: &std::path::Path) -> Vec<ClipSource> {
    let file = clip.file_name();
    mirrors
        .iter()
        .map(|base| ClipSource::Remote(format!("{}/{}", base.trim_end_matches('/'), file)))
        .chain(std::iter::once(ClipSource::Local(local_dir.join(&file))))
        .collect()
}
