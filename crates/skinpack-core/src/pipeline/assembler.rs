//! Pipeline orchestration - turns a batch of skins into a launcher document.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Instant;

use crate::config::Config;
use crate::error::{PipelineError, PipelineResult};
use crate::types::{CustomSkins, SkinDocument, SkinRecord};

use super::classify::is_slim;
use super::data_uri;
use super::decode::{mime_type, SkinDecoder};
use super::hash::TextureHasher;
use super::preview::render_head;
use super::source::{skin_name, sort_sources, SkinSource};
use super::timestamp::{format_timestamp, TimestampClock};

/// Receives progress notifications while a batch is assembled.
///
/// Every method defaults to doing nothing.
pub trait AssemblyObserver: Send + Sync {
    /// Called once, after sorting, with the number of skins.
    fn on_start(&self, _total: usize) {}

    /// Called after each record is built. `index` is 1-based.
    fn on_skin(&self, _index: usize, _record: &SkinRecord) {}

    /// Called once the document is complete.
    fn on_finish(&self, _document: &SkinDocument) {}
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl AssemblyObserver for NoopObserver {}

/// Builds a [`SkinDocument`] from skin sources, one file at a time.
pub struct SkinAssembler {
    step_ms: u64,
    observer: Arc<dyn AssemblyObserver>,
}

impl SkinAssembler {
    /// Create an assembler with the given configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            step_ms: config.timestamps.step_ms,
            observer: Arc::new(NoopObserver),
        }
    }

    /// Replace the progress observer.
    pub fn with_observer(mut self, observer: Arc<dyn AssemblyObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Assemble a document anchored at the current time.
    pub async fn assemble<S: SkinSource>(&self, sources: Vec<S>) -> PipelineResult<SkinDocument> {
        self.assemble_at(sources, Utc::now()).await
    }

    /// Assemble a document whose first record is stamped with `anchor`.
    ///
    /// Sources are sorted by case-folded name and processed strictly in
    /// sequence. The first failure aborts the whole batch.
    pub async fn assemble_at<S: SkinSource>(
        &self,
        mut sources: Vec<S>,
        anchor: DateTime<Utc>,
    ) -> PipelineResult<SkinDocument> {
        if sources.is_empty() {
            return Err(PipelineError::EmptyBatch);
        }

        let start = Instant::now();
        sort_sources(&mut sources);
        self.observer.on_start(sources.len());

        let mut clock = TimestampClock::new(anchor, self.step_ms);
        let mut skins = CustomSkins::new();

        for (i, source) in sources.iter().enumerate() {
            let index = i + 1;
            let record = self.process(source, index, &mut clock).await?;
            self.observer.on_skin(index, &record);

            let inserted = skins.insert(record);
            debug_assert!(inserted.is_ok(), "sequential ids are unique");
        }

        let document = SkinDocument::new(skins);
        tracing::debug!(
            "Assembled {} skin(s) in {:?}",
            document.custom_skins.len(),
            start.elapsed()
        );
        self.observer.on_finish(&document);
        Ok(document)
    }

    /// Run one source through read, hash, decode, classify and preview.
    async fn process<S: SkinSource>(
        &self,
        source: &S,
        index: usize,
        clock: &mut TimestampClock,
    ) -> PipelineResult<SkinRecord> {
        let start = Instant::now();
        let file_name = source.name();
        tracing::debug!("Processing: {}", file_name);

        let bytes = source.read().await.map_err(|e| PipelineError::Read {
            name: file_name.to_string(),
            source: e,
        })?;
        tracing::trace!("  Read {} bytes: {:?}", bytes.len(), start.elapsed());

        let hash_start = Instant::now();
        let texture_id = TextureHasher::texture_id(&bytes);
        tracing::trace!("  Texture id: {:?}", hash_start.elapsed());

        let decode_start = Instant::now();
        let decoded = SkinDecoder::decode(bytes.clone(), file_name).await?;
        tracing::trace!("  Decode: {:?}", decode_start.elapsed());

        let slim = is_slim(&decoded.pixels);

        let preview_start = Instant::now();
        let model_image =
            data_uri::encode_png(&render_head(&decoded.pixels)).map_err(|e| {
                PipelineError::Encode {
                    name: file_name.to_string(),
                    message: e.to_string(),
                }
            })?;
        tracing::trace!("  Preview: {:?}", preview_start.elapsed());

        let skin_image = data_uri::encode_bytes(&bytes, mime_type(decoded.format));
        let stamp = format_timestamp(clock.tick());

        tracing::debug!(
            "Processed {:?} in {:?} ({}x{}, slim={})",
            file_name,
            start.elapsed(),
            decoded.width,
            decoded.height,
            slim
        );

        Ok(SkinRecord {
            created: stamp.clone(),
            updated: stamp,
            id: format!("skin_{}", index),
            name: skin_name(file_name).to_string(),
            skin_image,
            model_image,
            slim,
            texture_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::source::SkinFile;
    use chrono::TimeZone;
    use image::{ImageBuffer, ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;
    use std::sync::Mutex;

    fn png(img: &RgbaImage) -> Vec<u8> {
        let mut buffer = Cursor::new(Vec::new());
        img.write_to(&mut buffer, ImageFormat::Png).unwrap();
        buffer.into_inner()
    }

    fn classic_png() -> Vec<u8> {
        png(&ImageBuffer::from_pixel(64, 64, Rgba([90, 60, 30, 255])))
    }

    fn anchor() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[derive(Default)]
    struct Recorder {
        events: Mutex<Vec<String>>,
    }

    impl AssemblyObserver for Recorder {
        fn on_start(&self, total: usize) {
            self.events.lock().unwrap().push(format!("start {total}"));
        }

        fn on_skin(&self, index: usize, record: &SkinRecord) {
            self.events
                .lock()
                .unwrap()
                .push(format!("skin {index} {}", record.name));
        }

        fn on_finish(&self, document: &SkinDocument) {
            self.events
                .lock()
                .unwrap()
                .push(format!("finish {}", document.custom_skins.len()));
        }
    }

    #[tokio::test]
    async fn test_empty_batch_rejected() {
        let assembler = SkinAssembler::new(&Config::default());
        let err = assembler.assemble(Vec::<SkinFile>::new()).await.unwrap_err();
        assert!(matches!(err, PipelineError::EmptyBatch));
    }

    #[tokio::test]
    async fn test_observer_sees_sorted_order() {
        let recorder = Arc::new(Recorder::default());
        let assembler = SkinAssembler::new(&Config::default()).with_observer(recorder.clone());
        let files = vec![
            SkinFile::new("b.png", classic_png()),
            SkinFile::new("A.png", classic_png()),
        ];
        assembler.assemble_at(files, anchor()).await.unwrap();

        let events = recorder.events.lock().unwrap().clone();
        assert_eq!(events, vec!["start 2", "skin 1 A", "skin 2 b", "finish 2"]);
    }

    #[tokio::test]
    async fn test_record_fields() {
        let bytes = classic_png();
        let assembler = SkinAssembler::new(&Config::default());
        let doc = assembler
            .assemble_at(vec![SkinFile::new("steve.old.png", bytes.clone())], anchor())
            .await
            .unwrap();

        let record = doc.custom_skins.get("skin_1").unwrap();
        assert_eq!(record.name, "steve");
        assert_eq!(record.created, "2024-05-01T12:00:00.000Z");
        assert_eq!(record.created, record.updated);
        assert_eq!(record.texture_id, TextureHasher::texture_id(&bytes));
        assert_eq!(record.skin_image, data_uri::encode_bytes(&bytes, "image/png"));
        assert!(!record.slim);

        let (_, preview) = data_uri::decode(&record.model_image).unwrap();
        let preview = image::load_from_memory(&preview).unwrap();
        assert_eq!((preview.width(), preview.height()), (128, 128));
    }

    #[tokio::test]
    async fn test_step_from_config() {
        let mut config = Config::default();
        config.timestamps.step_ms = 10;
        let assembler = SkinAssembler::new(&config);
        let files = vec![
            SkinFile::new("a.png", classic_png()),
            SkinFile::new("b.png", classic_png()),
        ];
        let doc = assembler.assemble_at(files, anchor()).await.unwrap();
        let second = doc.custom_skins.get("skin_2").unwrap();
        assert_eq!(second.created, "2024-05-01T11:59:59.990Z");
    }

    #[tokio::test]
    async fn test_decode_failure_aborts_batch() {
        let assembler = SkinAssembler::new(&Config::default());
        let files = vec![
            SkinFile::new("a.png", classic_png()),
            SkinFile::new("b.png", b"definitely not a png".to_vec()),
            SkinFile::new("c.png", classic_png()),
        ];
        let err = assembler.assemble(files).await.unwrap_err();
        match err {
            PipelineError::Decode { name, .. } => assert_eq!(name, "b.png"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
