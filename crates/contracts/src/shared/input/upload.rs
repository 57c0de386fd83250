use thiserror::Error;

pub const PROGRESS_TICK_MS: u32 = 200;
pub const PROGRESS_STEP: u8 = 10;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum UploadError {
    #[error("Please select an image file")]
    NotAnImage,
    #[error("File is too large (max {max_mb} MB)")]
    TooLarge { max_mb: f64 },
    #[error("File type not accepted: {mime}")]
    NotAccepted { mime: String },
}

fn mime_matches(pattern: &str, mime: &str, file_name: &str) -> bool {
    let pattern = pattern.trim().to_lowercase();
    if pattern.is_empty() {
        return false;
    }
    if let Some(ext) = pattern.strip_prefix('.') {
        return file_name.to_lowercase().ends_with(&format!(".{}", ext));
    }
    match pattern.strip_suffix("/*") {
        Some(group) => mime.to_lowercase().starts_with(&format!("{}/", group)),
        None => mime.eq_ignore_ascii_case(&pattern),
    }
}

/// Клиентская проверка выбранного файла перед «загрузкой»
pub fn check_upload(
    image_only: bool,
    accept: Option<&str>,
    file_name: &str,
    mime: &str,
    size_bytes: f64,
    max_size_mb: Option<f64>,
) -> Result<(), UploadError> {
    if image_only && !mime.starts_with("image/") {
        return Err(UploadError::NotAnImage);
    }

    if let Some(accept) = accept.filter(|a| !a.trim().is_empty()) {
        if !accept.split(',').any(|p| mime_matches(p, mime, file_name)) {
            return Err(UploadError::NotAccepted {
                mime: mime.to_string(),
            });
        }
    }

    if let Some(max_mb) = max_size_mb {
        if size_bytes > max_mb * 1024.0 * 1024.0 {
            return Err(UploadError::TooLarge { max_mb });
        }
    }

    Ok(())
}

/// Имитация прогресса загрузки: +10 за тик до 100
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UploadProgress {
    percent: u8,
    active: bool,
}

impl UploadProgress {
    pub fn start() -> Self {
        Self {
            percent: 0,
            active: true,
        }
    }

    pub fn percent(&self) -> u8 {
        self.percent
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Следующий тик таймера. Возвращает `false`, когда таймер пора остановить.
    pub fn tick(&mut self) -> bool {
        if !self.active {
            return false;
        }
        self.percent = (self.percent + PROGRESS_STEP).min(100);
        if self.percent >= 100 {
            self.active = false;
        }
        self.active
    }
}

pub fn format_size(bytes: f64) -> String {
    if bytes < 1024.0 {
        format!("{} B", bytes as u64)
    } else if bytes < 1024.0 * 1024.0 {
        format!("{:.1} KB", bytes / 1024.0)
    } else {
        format!("{:.1} MB", bytes / (1024.0 * 1024.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_requires_image_mime() {
        assert_eq!(
            check_upload(true, None, "a.pdf", "application/pdf", 10.0, None),
            Err(UploadError::NotAnImage)
        );
        assert!(check_upload(true, None, "a.png", "image/png", 10.0, Some(5.0)).is_ok());
    }

    #[test]
    fn test_size_limit() {
        let six_mb = 6.0 * 1024.0 * 1024.0;
        assert_eq!(
            check_upload(true, None, "a.png", "image/png", six_mb, Some(5.0)),
            Err(UploadError::TooLarge { max_mb: 5.0 })
        );
        assert!(check_upload(false, None, "a.bin", "", six_mb, None).is_ok());
    }

    #[test]
    fn test_accept_list() {
        let accept = Some("application/pdf, .docx, text/*");
        assert!(check_upload(false, accept, "a.pdf", "application/pdf", 1.0, None).is_ok());
        assert!(check_upload(false, accept, "b.DOCX", "", 1.0, None).is_ok());
        assert!(check_upload(false, accept, "c.txt", "text/plain", 1.0, None).is_ok());
        assert!(matches!(
            check_upload(false, accept, "d.png", "image/png", 1.0, None),
            Err(UploadError::NotAccepted { .. })
        ));
    }

    #[test]
    fn test_progress_stops_at_hundred() {
        let mut progress = UploadProgress::start();
        let mut ticks = 0;
        while progress.tick() {
            ticks += 1;
        }
        assert_eq!(ticks, 9);
        assert_eq!(progress.percent(), 100);
        assert!(!progress.is_active());
        assert!(!progress.tick());
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512.0), "512 B");
        assert_eq!(format_size(2048.0), "2.0 KB");
        assert_eq!(format_size(3.5 * 1024.0 * 1024.0), "3.5 MB");
    }
}
