use crate::templates::{copy_field, desktop_layout};
use maud::{html, Markup, PreEscaped};

/// The whole client workflow lives in this script: upload/drag-drop,
/// canvas downscale to a bounded resolution, the
/// idle/analyzing/completed/error state machine gating the generate
/// action, result rendering, and copy-to-clipboard.
const APP_JS: &str = r##"
(function () {
  const MAX_DIM = 1024;
  const JPEG_QUALITY = 0.8;

  const dropzone = document.getElementById('dropzone');
  const fileInput = document.getElementById('file-input');
  const uploadSection = document.getElementById('upload-section');
  const previewSection = document.getElementById('preview-section');
  const previewImg = document.getElementById('preview-img');
  const generateBtn = document.getElementById('generate-btn');
  const uploadError = document.getElementById('upload-error');
  const resultsSection = document.getElementById('results-section');
  const sourcesBox = document.getElementById('sources');
  const sourcesList = document.getElementById('sources-list');
  const resetBtns = document.querySelectorAll('.reset-btn');

  // Generate is allowed only from idle or error, so at most one request
  // is in flight for the user's action.
  let state = 'idle';
  let imageDataUrl = null;

  function show(el, on) { el.classList.toggle('hidden', !on); }

  function setError(message) {
    uploadError.textContent = message || '';
    show(uploadError, !!message);
  }

  function render() {
    show(uploadSection, !imageDataUrl);
    show(previewSection, !!imageDataUrl && state !== 'completed');
    show(resultsSection, state === 'completed');
    generateBtn.disabled = state === 'analyzing';
    generateBtn.textContent = state === 'analyzing' ? 'Analyzing…' : 'Generate SEO Listing';
  }

  function reset() {
    imageDataUrl = null;
    state = 'idle';
    fileInput.value = '';
    setError(null);
    render();
  }

  // Downsample so the larger axis fits MAX_DIM (never upscale) and
  // re-encode as JPEG to keep the request body small.
  function normalize(file) {
    return new Promise(function (resolve, reject) {
      const url = URL.createObjectURL(file);
      const img = new Image();
      img.onload = function () {
        URL.revokeObjectURL(url);
        const scale = Math.min(1, MAX_DIM / Math.max(img.width, img.height));
        const canvas = document.createElement('canvas');
        canvas.width = Math.round(img.width * scale);
        canvas.height = Math.round(img.height * scale);
        canvas.getContext('2d').drawImage(img, 0, 0, canvas.width, canvas.height);
        resolve(canvas.toDataURL('image/jpeg', JPEG_QUALITY));
      };
      img.onerror = function () {
        URL.revokeObjectURL(url);
        reject(new Error('image decode failed'));
      };
      img.src = url;
    });
  }

  function processFile(file) {
    if (!file || !file.type.startsWith('image/')) {
      setError('Please upload a valid image file.');
      return;
    }
    normalize(file).then(function (dataUrl) {
      // A new upload replaces everything from the previous run.
      imageDataUrl = dataUrl;
      previewImg.src = dataUrl;
      state = 'idle';
      setError(null);
      render();
    }).catch(function (err) {
      console.error(err);
      imageDataUrl = null;
      setError('Could not process that image. Try a different file.');
      render();
    });
  }

  function generate() {
    if (!imageDataUrl) return;
    if (state !== 'idle' && state !== 'error') return;
    state = 'analyzing';
    setError(null);
    render();

    fetch('/api/analyze', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify({ imageDataUrl: imageDataUrl })
    }).then(function (res) {
      if (!res.ok) {
        return res.text().then(function (text) {
          let message = text;
          try { message = JSON.parse(text).error || text; } catch (e) {}
          throw new Error(message);
        });
      }
      return res.json();
    }).then(function (data) {
      renderResult(data);
      state = 'completed';
      render();
    }).catch(function (err) {
      console.error('analyze failed:', err);
      state = 'error';
      setError('Analysis failed. Please try again with a clear image.');
      render();
    });
  }

  function renderResult(data) {
    document.querySelectorAll('.copy-field').forEach(function (el) {
      const key = el.dataset.field;
      el.querySelector('.content').textContent = data[key] || '';
    });
    sourcesList.innerHTML = '';
    const sources = data.sources || [];
    sources.forEach(function (source) {
      const a = document.createElement('a');
      a.href = source.uri;
      a.target = '_blank';
      a.rel = 'noopener noreferrer';
      a.textContent = source.title;
      sourcesList.appendChild(a);
    });
    show(sourcesBox, sources.length > 0);
  }

  dropzone.addEventListener('click', function () { fileInput.click(); });
  dropzone.addEventListener('dragover', function (e) {
    e.preventDefault();
    dropzone.classList.add('dragging');
  });
  dropzone.addEventListener('dragleave', function () {
    dropzone.classList.remove('dragging');
  });
  dropzone.addEventListener('drop', function (e) {
    e.preventDefault();
    dropzone.classList.remove('dragging');
    processFile(e.dataTransfer.files[0]);
  });
  fileInput.addEventListener('change', function () { processFile(fileInput.files[0]); });
  generateBtn.addEventListener('click', generate);
  resetBtns.forEach(function (btn) { btn.addEventListener('click', reset); });

  document.querySelectorAll('.copy-btn').forEach(function (btn) {
    btn.addEventListener('click', function () {
      const content = btn.closest('.copy-field').querySelector('.content').textContent;
      navigator.clipboard.writeText(content).then(function () {
        btn.textContent = 'Copied!';
        btn.classList.add('copied');
        setTimeout(function () {
          btn.textContent = 'Copy';
          btn.classList.remove('copied');
        }, 2000);
      });
    });
  });

  render();
})();
"##;

pub fn home_page() -> Markup {
    desktop_layout(
        "Etsy Mode",
        html! {
            main {
                section id="upload-section" {
                    div id="dropzone" class="dropzone" {
                        p class="lead" { "Click to upload or drag image here" }
                        p class="hint" { "Supports JPG, PNG, WEBP" }
                    }
                    input id="file-input" type="file" accept="image/*" class="hidden";
                }

                p id="upload-error" class="error-text hidden" {}

                section id="preview-section" class="preview-wrap hidden" {
                    img id="preview-img" alt="Preview";
                    div {
                        button id="generate-btn" type="button" class="primary" { "Generate SEO Listing" }
                        " "
                        button type="button" class="outline reset-btn" { "Remove" }
                    }
                }

                section id="results-section" class="hidden" {
                    div class="results-head" {
                        h2 { "SEO Optimized Listing" }
                        button type="button" class="outline reset-btn" { "Upload Another" }
                    }
                    div class="fields" {
                        (copy_field("Optimized Title", "title"))
                        (copy_field("Description", "description"))
                        div class="field-pair" {
                            (copy_field("1st Main Color", "firstMainColor"))
                            (copy_field("2nd Main Color", "secondMainColor"))
                            (copy_field("Home Style", "homeStyle"))
                            (copy_field("Celebration", "celebration"))
                            (copy_field("Occasion", "occasion"))
                            (copy_field("Subject", "subject"))
                        }
                        (copy_field("Room (Top 5)", "room"))
                        (copy_field("Tags (13)", "tags"))
                        div id="sources" class="sources hidden" {
                            h3 { "Research Sources" }
                            div id="sources-list" {}
                        }
                    }
                }
            }
            script { (PreEscaped(APP_JS)) }
        },
    )
}
