//! Form state: selected dates and attached photos
//!
//! Both collections keep insertion order, which is also display order.

use crate::dates;
use crate::encoding;
use crate::error::FormError;
use crate::models::{FileMeta, PendingUpload, PhotoEntry, SelectedFile, MAX_PHOTOS};

/// Result of a successful [`FormState::add_date`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOutcome {
    Added,
    /// Already in the list, nothing changed
    AlreadySelected,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    dates: Vec<String>,
    photos: Vec<PhotoEntry>,
    /// Photo slots held by uploads that are still being read
    reserved: usize,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dates(&self) -> &[String] {
        &self.dates
    }

    pub fn photos(&self) -> &[PhotoEntry] {
        &self.photos
    }

    /// Number of uploads still in flight
    pub fn pending_uploads(&self) -> usize {
        self.reserved
    }

    /// Photo slots left after counting in-flight uploads
    pub fn remaining_photo_slots(&self) -> usize {
        MAX_PHOTOS.saturating_sub(self.photos.len() + self.reserved)
    }

    /// Adds a date typed by the user
    ///
    /// The input is trimmed first. Invalid input leaves the list untouched.
    pub fn add_date(&mut self, raw: &str) -> Result<DateOutcome, FormError> {
        let date = raw.trim();
        if !dates::is_valid_date(date) {
            return Err(FormError::InvalidDate(date.to_string()));
        }

        if self.dates.iter().any(|d| d == date) {
            return Ok(DateOutcome::AlreadySelected);
        }

        self.dates.push(date.to_string());
        Ok(DateOutcome::Added)
    }

    /// Removes the date at `index`, `None` if out of range
    pub fn remove_date(&mut self, index: usize) -> Option<String> {
        (index < self.dates.len()).then(|| self.dates.remove(index))
    }

    /// Selected dates joined for the payload
    pub fn joined_dates(&self) -> String {
        dates::join_dates(&self.dates)
    }

    /// Checks a batch against the photo limit and reserves slots for its images
    ///
    /// The whole batch counts against the limit, including files that are
    /// skipped afterwards for not being images. On rejection nothing is
    /// reserved.
    pub fn reserve_batch(&mut self, files: &[FileMeta]) -> Result<Vec<PendingUpload>, FormError> {
        let current = self.photos.len() + self.reserved;
        if current + files.len() > MAX_PHOTOS {
            return Err(FormError::PhotoLimit {
                max: MAX_PHOTOS,
                current,
                requested: files.len(),
            });
        }

        let pending: Vec<PendingUpload> = files
            .iter()
            .filter_map(|meta| {
                encoding::resolve_image_mime(meta).map(|mime| PendingUpload {
                    name: meta.name.clone(),
                    mime,
                })
            })
            .collect();

        self.reserved += pending.len();
        Ok(pending)
    }

    /// Encodes the bytes of a reserved upload and appends the photo
    ///
    /// Returns `None` without touching the photos when no slot is reserved or
    /// the limit is already reached.
    pub fn complete_upload(&mut self, pending: PendingUpload, bytes: &[u8]) -> Option<&PhotoEntry> {
        if self.reserved == 0 || self.photos.len() >= MAX_PHOTOS {
            log::warn!("No reserved photo slot for '{}'", pending.name);
            return None;
        }

        self.reserved -= 1;
        let data = encoding::to_data_url(&pending.mime, bytes);
        self.photos.push(PhotoEntry::new(data, pending.name, pending.mime));
        self.photos.last()
    }

    /// Releases the slot of an upload whose bytes could not be read
    pub fn cancel_upload(&mut self, pending: PendingUpload) {
        log::debug!("Releasing photo slot for '{}'", pending.name);
        self.reserved = self.reserved.saturating_sub(1);
    }

    /// Adds a batch whose bytes are already loaded
    ///
    /// Returns the number of photos added.
    pub fn handle_files(&mut self, files: Vec<SelectedFile>) -> Result<usize, FormError> {
        let metas: Vec<FileMeta> = files.iter().map(|f| f.meta.clone()).collect();
        let pending = self.reserve_batch(&metas)?;
        let added = pending.len();

        let images = files
            .into_iter()
            .filter(|f| encoding::resolve_image_mime(&f.meta).is_some());
        for (p, file) in pending.into_iter().zip(images) {
            self.complete_upload(p, &file.bytes);
        }

        Ok(added)
    }

    /// Removes the photo at `index`, `None` if out of range
    pub fn remove_photo(&mut self, index: usize) -> Option<PhotoEntry> {
        (index < self.photos.len()).then(|| self.photos.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(name: &str) -> SelectedFile {
        SelectedFile {
            meta: FileMeta::new(name, Some("image/jpeg".to_string())),
            bytes: name.as_bytes().to_vec(),
        }
    }

    fn document(name: &str) -> SelectedFile {
        SelectedFile {
            meta: FileMeta::new(name, Some("application/pdf".to_string())),
            bytes: vec![1, 2, 3],
        }
    }

    fn dates_of(state: &FormState) -> Vec<&str> {
        state.dates().iter().map(String::as_str).collect()
    }

    #[test]
    fn test_add_date_trims_and_appends() {
        let mut state = FormState::new();
        assert_eq!(state.add_date("  01.01.2025 "), Ok(DateOutcome::Added));
        assert_eq!(state.add_date("29.02.2024"), Ok(DateOutcome::Added));
        assert_eq!(dates_of(&state), vec!["01.01.2025", "29.02.2024"]);
    }

    #[test]
    fn test_add_date_duplicate_is_not_an_error() {
        let mut state = FormState::new();
        state.add_date("01.01.2025").unwrap();
        assert_eq!(state.add_date("01.01.2025"), Ok(DateOutcome::AlreadySelected));
        assert_eq!(state.dates().len(), 1);
    }

    #[test]
    fn test_add_date_exact_match_only() {
        let mut state = FormState::new();
        state.add_date("01.02.2025").unwrap();
        assert_eq!(state.add_date("1.2.2025"), Ok(DateOutcome::Added));
        assert_eq!(state.dates().len(), 2);
    }

    #[test]
    fn test_add_invalid_date_leaves_state() {
        let mut state = FormState::new();
        state.add_date("01.01.2025").unwrap();
        let before = state.clone();

        for input in ["31.02.2024", "", "   ", "tomorrow", "2025-01-01"] {
            assert!(matches!(
                state.add_date(input),
                Err(FormError::InvalidDate(_))
            ));
        }
        assert_eq!(state, before);
    }

    #[test]
    fn test_remove_date_keeps_order() {
        let mut state = FormState::new();
        for d in ["01.01.2025", "02.01.2025", "03.01.2025", "04.01.2025"] {
            state.add_date(d).unwrap();
        }

        assert_eq!(state.remove_date(1).as_deref(), Some("02.01.2025"));
        assert_eq!(dates_of(&state), vec!["01.01.2025", "03.01.2025", "04.01.2025"]);

        assert_eq!(state.remove_date(3), None);
        assert_eq!(state.dates().len(), 3);
        assert_eq!(state.joined_dates(), "01.01.2025, 03.01.2025, 04.01.2025");
    }

    #[test]
    fn test_batch_over_limit_is_rejected_whole() {
        let mut state = FormState::new();
        assert_eq!(
            state.handle_files(vec![image("a.jpg"), image("b.jpg"), image("c.jpg")]),
            Ok(3)
        );

        let err = state
            .handle_files(vec![image("d.jpg"), image("e.jpg"), image("f.jpg")])
            .unwrap_err();
        assert_eq!(
            err,
            FormError::PhotoLimit {
                max: MAX_PHOTOS,
                current: 3,
                requested: 3
            }
        );
        assert_eq!(state.photos().len(), 3);

        assert_eq!(state.handle_files(vec![image("d.jpg"), image("e.jpg")]), Ok(2));
        assert_eq!(state.photos().len(), MAX_PHOTOS);
        assert!(state.handle_files(vec![image("g.jpg")]).is_err());
    }

    #[test]
    fn test_non_images_count_against_limit_but_are_skipped() {
        let mut state = FormState::new();
        state
            .handle_files(vec![image("a.jpg"), image("b.jpg"), image("c.jpg")])
            .unwrap();

        assert!(state
            .handle_files(vec![image("d.jpg"), document("brief.pdf"), image("e.jpg")])
            .is_err());

        assert_eq!(
            state.handle_files(vec![document("brief.pdf"), image("d.jpg")]),
            Ok(1)
        );
        let names: Vec<&str> = state.photos().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["a.jpg", "b.jpg", "c.jpg", "d.jpg"]);
    }

    #[test]
    fn test_photo_entry_is_data_url() {
        let mut state = FormState::new();
        state
            .handle_files(vec![SelectedFile {
                meta: FileMeta::new("x.png", Some("image/png".to_string())),
                bytes: b"abc".to_vec(),
            }])
            .unwrap();

        let photo = &state.photos()[0];
        assert_eq!(photo.data, "data:image/png;base64,YWJj");
        assert_eq!(photo.mime, "image/png");
        assert_eq!(photo.name, "x.png");
    }

    #[test]
    fn test_reservations_count_towards_limit() {
        let mut state = FormState::new();
        let first = state
            .reserve_batch(&[
                FileMeta::new("a.jpg", Some("image/jpeg".to_string())),
                FileMeta::new("b.jpg", Some("image/jpeg".to_string())),
                FileMeta::new("c.jpg", Some("image/jpeg".to_string())),
            ])
            .unwrap();
        assert_eq!(state.pending_uploads(), 3);
        assert_eq!(state.remaining_photo_slots(), 2);

        let overlapping = [
            FileMeta::new("d.jpg", Some("image/jpeg".to_string())),
            FileMeta::new("e.jpg", Some("image/jpeg".to_string())),
            FileMeta::new("f.jpg", Some("image/jpeg".to_string())),
        ];
        assert!(state.reserve_batch(&overlapping).is_err());
        assert_eq!(state.pending_uploads(), 3);

        // Completions may arrive in any order
        let mut first = first.into_iter();
        let a = first.next().unwrap();
        let b = first.next().unwrap();
        let c = first.next().unwrap();
        assert!(state.complete_upload(c, b"c").is_some());
        state.cancel_upload(b);
        assert!(state.complete_upload(a, b"a").is_some());

        assert_eq!(state.pending_uploads(), 0);
        let names: Vec<&str> = state.photos().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["c.jpg", "a.jpg"]);
        assert_eq!(state.remaining_photo_slots(), 3);
    }

    #[test]
    fn test_complete_without_reservation_is_refused() {
        let mut state = FormState::new();
        for i in 0..MAX_PHOTOS + 2 {
            let upload = PendingUpload {
                name: format!("{}.jpg", i),
                mime: "image/jpeg".to_string(),
            };
            assert!(state.complete_upload(upload, b"x").is_none());
        }
        assert!(state.photos().is_empty());
        assert_eq!(state.pending_uploads(), 0);
        assert_eq!(state.remaining_photo_slots(), MAX_PHOTOS);
    }

    #[test]
    fn test_complete_stops_at_limit() {
        let mut state = FormState::new();
        let files: Vec<SelectedFile> = (0..MAX_PHOTOS)
            .map(|i| image(&format!("{}.jpg", i)))
            .collect();
        assert_eq!(state.handle_files(files), Ok(MAX_PHOTOS));

        // A reservation count that outlived its photos must not push past the limit
        state.reserved = 1;
        let extra = PendingUpload {
            name: "extra.jpg".to_string(),
            mime: "image/jpeg".to_string(),
        };
        assert!(state.complete_upload(extra, b"x").is_none());
        assert_eq!(state.photos().len(), MAX_PHOTOS);
    }

    #[test]
    fn test_remove_photo_keeps_order() {
        let mut state = FormState::new();
        state
            .handle_files(vec![image("a.jpg"), image("b.jpg"), image("c.jpg")])
            .unwrap();

        let removed = state.remove_photo(0).unwrap();
        assert_eq!(removed.name, "a.jpg");
        let names: Vec<&str> = state.photos().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["b.jpg", "c.jpg"]);
        assert!(state.remove_photo(2).is_none());
    }
}
