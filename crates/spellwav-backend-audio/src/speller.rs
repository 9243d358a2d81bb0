//! High-level entry point holding options and a clip cache.

use std::io::Write;
use std::sync::Arc;

use spellwav_spec::{OutputSpec, RenderOptions};

use crate::cache::{clip_file_name, ClipCache};
use crate::error::{AudioError, AudioResult};
use crate::render::{render, RenderResult};

/// Renders texts with one set of options, reusing decoded clips across calls.
///
/// ```no_run
/// use spellwav_backend_audio::SpellAudio;
/// use spellwav_spec::RenderOptions;
///
/// let speller = SpellAudio::new(RenderOptions::default().with_sound_dir("/usr/share/spellwav/en"));
/// let mut out = Vec::new();
/// let content_type = speller.output("x7Kq", &mut out)?;
/// assert_eq!(content_type, "audio/x-wav");
/// # Ok::<(), spellwav_backend_audio::AudioError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SpellAudio {
    options: RenderOptions,
    cache: Arc<ClipCache>,
}

impl SpellAudio {
    /// Creates a speller with its own clip cache.
    pub fn new(options: RenderOptions) -> Self {
        Self::with_cache(options, Arc::new(ClipCache::new()))
    }

    /// Creates a speller sharing an existing cache.
    pub fn with_cache(options: RenderOptions, cache: Arc<ClipCache>) -> Self {
        Self { options, cache }
    }

    /// Current options.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Replaces the options. Cached clips stay valid since they are keyed by
    /// directory.
    pub fn set_options(&mut self, options: RenderOptions) {
        self.options = options;
    }

    /// The clip cache in use.
    pub fn cache(&self) -> &Arc<ClipCache> {
        &self.cache
    }

    /// File name of the clip that speaks `c` under the current options.
    pub fn file_name(&self, c: char) -> String {
        clip_file_name(c, self.options.fold_cases)
    }

    /// Renders `text` to a WAV container.
    pub fn render(&self, text: &str) -> AudioResult<RenderResult> {
        render(&OutputSpec::with_options(text, self.options.clone()), &self.cache)
    }

    /// Renders `text` and writes the container to `writer`.
    ///
    /// Returns the content type to deliver the bytes with. Nothing is written
    /// if rendering fails.
    pub fn output<W: Write>(&self, text: &str, writer: &mut W) -> AudioResult<&str> {
        let result = self.render(text)?;
        writer.write_all(&result.wav_data).map_err(AudioError::Write)?;
        writer.flush().map_err(AudioError::Write)?;
        Ok(&self.options.content_type)
    }
}

impl Default for SpellAudio {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}
