//! Test utilities and helper functions for the imgscrape test suite

use anyhow::Result;
use image::{DynamicImage, ImageFormat};
use imgscrape::acquirer::{Acquire, AcquisitionError, AcquisitionResult, SavedImage};
use imgscrape::image_search::{ImageRecord, PageFetchError, PageRequest, PageSource};
use imgscrape::utils::image_basename;
use std::collections::HashSet;
use std::io::Cursor;
use std::path::PathBuf;
use std::sync::Mutex;
use tempfile::TempDir;

/// Creates a temporary directory for test output
#[allow(dead_code)]
pub fn create_test_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// One result entry as the search endpoint embeds it in its markup
#[allow(dead_code)]
pub fn result_entry(murl: &str, purl: &str, title: &str, width: u32, height: u32) -> String {
    format!(
        "<div class=\"imgpt\"><a class=\"iusc\" m=\"{{&quot;purl&quot;:&quot;{purl}&quot;,\
         &quot;murl&quot;:&quot;{murl}&quot;,&quot;t&quot;:&quot;{title}&quot;}}\"></a>\
         <div class=\"img_info\" m=\"{{&quot;w&quot;:{width},&quot;h&quot;:{height}}}\"></div></div>"
    )
}

/// A result page holding one entry per image URL
#[allow(dead_code)]
pub fn result_page(urls: &[String]) -> String {
    let entries: String = urls
        .iter()
        .enumerate()
        .map(|(i, url)| {
            result_entry(
                url,
                &format!("https://source.test/page{i}"),
                &format!("Title {i}"),
                640,
                480,
            )
        })
        .collect();
    format!("<!DOCTYPE html><html><body><div id=\"mmComponent\">{entries}</div></body></html>")
}

/// PNG-encoded blank image
#[allow(dead_code)]
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = DynamicImage::new_rgb8(width, height);
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .expect("PNG encoding should succeed");
    buf
}

/// Page source that serves a fixed list of pages, then empty bodies
///
/// `None` entries simulate a failed fetch.
#[allow(dead_code)]
pub struct ScriptedPages {
    pages: Vec<Option<String>>,
    requests: Mutex<Vec<PageRequest>>,
}

#[allow(dead_code)]
impl ScriptedPages {
    pub fn new(pages: Vec<Option<String>>) -> Self {
        Self {
            pages,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<PageRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl PageSource for ScriptedPages {
    async fn fetch_page(&self, request: &PageRequest) -> Result<String, PageFetchError> {
        self.requests.lock().unwrap().push(request.clone());
        match self.pages.get(request.page_index) {
            Some(Some(markup)) => Ok(markup.clone()),
            Some(None) => Err(PageFetchError::InvalidRequest("scripted failure".to_string())),
            None => Ok(String::new()),
        }
    }
}

/// Page source that never runs out: every page has `per_page` new URLs
#[allow(dead_code)]
pub struct EndlessPages {
    pub per_page: usize,
    requests: Mutex<usize>,
}

#[allow(dead_code)]
impl EndlessPages {
    pub fn new(per_page: usize) -> Self {
        Self {
            per_page,
            requests: Mutex::new(0),
        }
    }

    pub fn request_count(&self) -> usize {
        *self.requests.lock().unwrap()
    }
}

impl PageSource for EndlessPages {
    async fn fetch_page(&self, request: &PageRequest) -> Result<String, PageFetchError> {
        *self.requests.lock().unwrap() += 1;
        let urls: Vec<String> = (0..self.per_page)
            .map(|i| format!("https://img.test/p{}/{i}.jpg", request.page_index))
            .collect();
        Ok(result_page(&urls))
    }
}

/// Acquirer that records attempts and fails for chosen URLs
#[allow(dead_code)]
pub struct RecordingAcquirer {
    failing: HashSet<String>,
    attempts: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl RecordingAcquirer {
    pub fn new() -> Self {
        Self::failing(&[])
    }

    pub fn failing(urls: &[&str]) -> Self {
        Self {
            failing: urls.iter().map(|u| (*u).to_string()).collect(),
            attempts: Mutex::new(Vec::new()),
        }
    }

    pub fn attempts(&self) -> Vec<String> {
        self.attempts.lock().unwrap().clone()
    }
}

impl Acquire for RecordingAcquirer {
    async fn acquire(&self, record: &ImageRecord) -> AcquisitionResult<SavedImage> {
        self.attempts.lock().unwrap().push(record.image_url.clone());

        if self.failing.contains(&record.image_url) {
            return Err(AcquisitionError::InvalidImage {
                url: record.image_url.clone(),
                reason: "scripted failure".to_string(),
            });
        }

        Ok(SavedImage {
            image_path: PathBuf::from(format!(
                "/saved/img_{}",
                image_basename(&record.image_url)
            )),
            metadata_path: None,
        })
    }
}

/// Starts a mock HTTP server
#[allow(dead_code)]
pub async fn setup_mock_server() -> mockito::ServerGuard {
    mockito::Server::new_async().await
}
