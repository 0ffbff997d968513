//! Выбор текущего изображения галереи проекта

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GalleryError {
    #[error("Изображение {index} вне галереи из {len} элементов")]
    OutOfRange { index: usize, len: usize },
}

/// Индекс текущего изображения в упорядоченной галерее.
///
/// Индекс всегда либо указывает на существующий элемент, либо равен 0
/// для пустой галереи.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GallerySelector {
    index: usize,
    len: usize,
}

impl GallerySelector {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_selected(&self, index: usize) -> bool {
        !self.is_empty() && self.index == index
    }

    /// Выбрать изображение. Индекс вне диапазона отклоняется,
    /// текущий выбор при этом не меняется.
    pub fn select(&mut self, index: usize) -> Result<(), GalleryError> {
        if index >= self.len {
            return Err(GalleryError::OutOfRange {
                index,
                len: self.len,
            });
        }
        self.index = index;
        Ok(())
    }

    /// Следующее изображение с переходом на начало
    pub fn next(&mut self) {
        if !self.is_empty() {
            self.index = (self.index + 1) % self.len;
        }
    }

    /// Предыдущее изображение с переходом в конец
    pub fn previous(&mut self) {
        if !self.is_empty() {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Текущий элемент галереи
    pub fn current<'a, T>(&self, gallery: &'a [T]) -> Option<&'a T> {
        gallery.get(self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GALLERY: [&str; 3] = ["a.jpg", "b.jpg", "c.jpg"];

    #[test]
    fn test_starts_at_first_image() {
        let selector = GallerySelector::new(GALLERY.len());
        assert_eq!(selector.index(), 0);
        assert_eq!(selector.current(&GALLERY), Some(&"a.jpg"));
        assert!(selector.is_selected(0));
    }

    #[test]
    fn test_select_valid_index() {
        let mut selector = GallerySelector::new(GALLERY.len());
        for (i, image) in GALLERY.iter().enumerate() {
            selector.select(i).unwrap();
            assert_eq!(selector.current(&GALLERY), Some(image));
        }
    }

    #[test]
    fn test_select_same_index_is_idempotent() {
        let mut selector = GallerySelector::new(GALLERY.len());
        selector.select(1).unwrap();
        let before = selector;
        selector.select(1).unwrap();
        assert_eq!(selector, before);
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        let mut selector = GallerySelector::new(GALLERY.len());
        selector.select(2).unwrap();
        assert_eq!(
            selector.select(3),
            Err(GalleryError::OutOfRange { index: 3, len: 3 })
        );
        assert_eq!(selector.index(), 2);
    }

    #[test]
    fn test_empty_gallery() {
        let mut selector = GallerySelector::new(0);
        let empty: [&str; 0] = [];
        assert!(selector.is_empty());
        assert!(!selector.is_selected(0));
        assert_eq!(selector.current(&empty), None);
        assert!(selector.select(0).is_err());
        selector.next();
        selector.previous();
        assert_eq!(selector.index(), 0);
    }

    #[test]
    fn test_next_and_previous_wrap() {
        let mut selector = GallerySelector::new(GALLERY.len());
        selector.previous();
        assert_eq!(selector.index(), 2);
        selector.next();
        assert_eq!(selector.index(), 0);
        selector.next();
        assert_eq!(selector.current(&GALLERY), Some(&"b.jpg"));
    }
}
