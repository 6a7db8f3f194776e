//! Browser binding: wires the meme page controls to a [`MemeEditor`].
//!
//! ```javascript
//! import init, { MemeApp } from 'meme-core-view';
//!
//! await init();
//! const app = MemeApp.attach();
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Document, Event, EventTarget, HtmlButtonElement, HtmlCanvasElement, HtmlImageElement, HtmlInputElement,
    HtmlSelectElement, SpeechSynthesis, SpeechSynthesisUtterance, SpeechSynthesisVoice, Url,
};

use crate::render::web::execute;
use crate::{DrawCommand, MemeConfig, MemeEditor, MemeError, Voice, VoiceCatalog, Volume};

/// Forwards `log` records to the browser console.
struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let message = JsValue::from_str(&format!("[{}] {}: {}", record.level(), record.target(), record.args()));
        match record.level() {
            log::Level::Error => web_sys::console::error_1(&message),
            log::Level::Warn => web_sys::console::warn_1(&message),
            _ => web_sys::console::log_1(&message),
        }
    }

    fn flush(&self) {}
}

// Install the panic hook and console logger when the module loads
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(log::LevelFilter::Info);
    }
}

fn to_js(err: MemeError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn report(result: Result<(), JsValue>) {
    if let Err(err) = result {
        log::error!("{}", err.as_string().unwrap_or_else(|| format!("{err:?}")));
    }
}

fn by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Missing element #{id}")))?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("Element #{id} has the wrong type")))
}

fn by_selector<T: JsCast>(document: &Document, selector: &str) -> Result<T, JsValue> {
    document
        .query_selector(selector)?
        .ok_or_else(|| JsValue::from_str(&format!("No element matches {selector}")))?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("Element {selector} has the wrong type")))
}

fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    // Listeners live as long as the page
    closure.forget();
    Ok(())
}

/// Page elements the app reads from and writes to.
struct Controls {
    document: Document,
    canvas: HtmlCanvasElement,
    file: HtmlInputElement,
    form: EventTarget,
    generate: HtmlButtonElement,
    clear: HtmlButtonElement,
    read: HtmlButtonElement,
    top: HtmlInputElement,
    bottom: HtmlInputElement,
    voice: HtmlSelectElement,
    volume_group: EventTarget,
    slider: HtmlInputElement,
    icon: HtmlImageElement,
}

impl Controls {
    fn find(document: Document, config: &MemeConfig) -> Result<Self, JsValue> {
        let ids = &config.elements;
        let form = format!("#{}", ids.form);
        let volume = format!("#{}", ids.volume_group);
        Ok(Self {
            canvas: by_id(&document, &ids.canvas)?,
            file: by_id(&document, &ids.image_input)?,
            form: by_id(&document, &ids.form)?,
            generate: by_selector(&document, &format!("{form} [type='submit']"))?,
            clear: by_selector(&document, &format!("{form} [type='reset']"))?,
            read: by_selector(&document, &format!("{form} [type='button']"))?,
            top: by_id(&document, &ids.text_top)?,
            bottom: by_id(&document, &ids.text_bottom)?,
            voice: by_id(&document, &ids.voice_selection)?,
            volume_group: by_id(&document, &ids.volume_group)?,
            slider: by_selector(&document, &format!("{volume} [type='range']"))?,
            icon: by_selector(&document, &format!("{volume} img"))?,
            document,
        })
    }
}

struct AppState {
    editor: MemeEditor,
    voices: VoiceCatalog,
    platform_voices: Vec<SpeechSynthesisVoice>,
    /// Image currently drawn on the canvas
    image: Option<HtmlImageElement>,
    /// Incremented per file selection; stale decodes are dropped
    load_token: u64,
}

struct Inner {
    controls: Controls,
    synth: SpeechSynthesis,
    state: RefCell<AppState>,
}

/// A meme editor bound to the page's canvas, form and speech controls.
#[wasm_bindgen]
pub struct MemeApp {
    inner: Rc<Inner>,
}

#[wasm_bindgen]
impl MemeApp {
    /// Attach to the page using the default element ids and 400×400 canvas.
    #[wasm_bindgen(js_name = attach)]
    pub fn attach_default() -> Result<MemeApp, JsValue> {
        Self::attach(MemeConfig::default())
    }
}

#[cfg(feature = "toml")]
#[wasm_bindgen]
impl MemeApp {
    /// Attach using settings parsed from a TOML string.
    #[wasm_bindgen(js_name = attachWithToml)]
    pub fn attach_with_toml(config: &str) -> Result<MemeApp, JsValue> {
        let config = MemeConfig::from_toml_str(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Self::attach(config)
    }
}

impl MemeApp {
    /// Look up the page controls, populate the voice list and subscribe to
    /// every control event.
    pub fn attach(config: MemeConfig) -> Result<MemeApp, JsValue> {
        let window = web_sys::window().ok_or("No window available")?;
        let document = window.document().ok_or("No document available")?;
        let synth = window.speech_synthesis()?;
        let controls = Controls::find(document, &config)?;

        controls.canvas.set_width(config.canvas_width.round() as u32);
        controls.canvas.set_height(config.canvas_height.round() as u32);

        let inner = Rc::new(Inner {
            controls,
            synth,
            state: RefCell::new(AppState {
                editor: MemeEditor::new(config),
                voices: VoiceCatalog::new(),
                platform_voices: Vec::new(),
                image: None,
                load_token: 0,
            }),
        });

        inner.populate_voices()?;
        inner.sync_controls();
        Inner::subscribe(&inner)?;
        log::info!("meme editor attached");

        Ok(MemeApp { inner })
    }

    /// Snapshot of the editor state.
    pub fn editor(&self) -> MemeEditor {
        self.inner.state.borrow().editor.clone()
    }
}

impl Inner {
    fn subscribe(inner: &Rc<Inner>) -> Result<(), JsValue> {
        let controls = &inner.controls;

        let this = Rc::clone(inner);
        listen(&controls.file, "change", move |_| report(Inner::on_file_change(&this)))?;

        let this = Rc::clone(inner);
        listen(&controls.form, "submit", move |event| {
            event.prevent_default();
            report(this.on_generate());
        })?;

        // Reset buttons also clear the caption fields natively
        let this = Rc::clone(inner);
        listen(&controls.clear, "click", move |_| report(this.on_clear()))?;

        let this = Rc::clone(inner);
        listen(&controls.read, "click", move |_| report(this.on_read()))?;

        let this = Rc::clone(inner);
        listen(&controls.volume_group, "input", move |_| report(this.on_volume()))?;

        let this = Rc::clone(inner);
        let voices_changed = Closure::<dyn FnMut()>::new(move || report(this.populate_voices()));
        inner.synth.set_onvoiceschanged(Some(voices_changed.as_ref().unchecked_ref()));
        voices_changed.forget();

        Ok(())
    }

    fn on_file_change(inner: &Rc<Inner>) -> Result<(), JsValue> {
        let file = inner
            .controls
            .file
            .files()
            .and_then(|files| files.get(0))
            .ok_or_else(|| to_js(MemeError::NoImage))?;

        let url = Url::create_object_url_with_blob(&file)?;
        let image = HtmlImageElement::new()?;
        image.set_alt(&file.name());
        image.set_src(&url);

        let token = {
            let mut state = inner.state.borrow_mut();
            state.load_token += 1;
            state.load_token
        };

        let this = Rc::clone(inner);
        wasm_bindgen_futures::spawn_local(async move {
            let decoding: js_sys::Promise = image.decode();
            let decoded = JsFuture::from(decoding).await;
            report(Url::revoke_object_url(&url));
            if this.state.borrow().load_token != token {
                log::debug!("dropping stale image decode");
                return;
            }
            report(decoded.and_then(|_| this.show_image(image)));
        });
        Ok(())
    }

    fn show_image(&self, image: HtmlImageElement) -> Result<(), JsValue> {
        let canvas = &self.controls.canvas;
        let mut state = self.state.borrow_mut();
        let loaded = state
            .editor
            .load_image(image.natural_width() as f64, image.natural_height() as f64);

        let result = match loaded {
            Ok(commands) => {
                execute(canvas, Some(&image), &commands)?;
                state.image = Some(image);
                Ok(())
            }
            Err(err) => {
                execute(canvas, None, &[DrawCommand::Clear])?;
                state.image = None;
                Err(to_js(err))
            }
        };
        drop(state);
        self.sync_controls();
        result
    }

    fn on_generate(&self) -> Result<(), JsValue> {
        let controls = &self.controls;
        let mut state = self.state.borrow_mut();
        let commands = state
            .editor
            .generate(&controls.top.value(), &controls.bottom.value())
            .map_err(to_js)?;
        execute(&controls.canvas, state.image.as_ref(), &commands)?;
        drop(state);
        self.sync_controls();
        Ok(())
    }

    fn on_clear(&self) -> Result<(), JsValue> {
        let mut state = self.state.borrow_mut();
        let commands = state.editor.clear().map_err(to_js)?;
        execute(&self.controls.canvas, state.image.as_ref(), &commands)?;
        drop(state);
        self.sync_controls();
        Ok(())
    }

    fn on_read(&self) -> Result<(), JsValue> {
        let controls = &self.controls;
        let state = self.state.borrow();
        let voice_name = controls
            .voice
            .selected_options()
            .item(0)
            .and_then(|option| option.get_attribute("data-name"));
        let volume = Volume::parse(&controls.slider.value()).map_err(to_js)?;
        let utterance = state
            .editor
            .read_aloud(
                &controls.top.value(),
                &controls.bottom.value(),
                &state.voices,
                voice_name.as_deref(),
                volume,
            )
            .map_err(to_js)?;

        let speech = SpeechSynthesisUtterance::new_with_text(&utterance.text)?;
        if let Some(voice) = &utterance.voice {
            let platform = state.platform_voices.iter().find(|v| v.name() == voice.name);
            speech.set_voice(platform);
        }
        speech.set_volume(utterance.volume);
        self.synth.speak(&speech);
        Ok(())
    }

    fn on_volume(&self) -> Result<(), JsValue> {
        let volume = Volume::parse(&self.controls.slider.value()).map_err(to_js)?;
        let state = self.state.borrow();
        let icon = volume.level().icon_path(&state.editor.config().icon_dir);
        self.controls.icon.set_src(&icon);
        Ok(())
    }

    /// Rebuild the voice dropdown from the platform's current voice list.
    ///
    /// The placeholder option stays until the platform reports voices.
    fn populate_voices(&self) -> Result<(), JsValue> {
        let reported: js_sys::Array = self.synth.get_voices();
        let platform: Vec<SpeechSynthesisVoice> = reported
            .iter()
            .filter_map(|v| v.dyn_into::<SpeechSynthesisVoice>().ok())
            .collect();
        if platform.is_empty() {
            return Ok(());
        }

        let voices: Vec<Voice> = platform
            .iter()
            .map(|v| Voice::new(v.name(), v.lang(), v.default()))
            .collect();

        let select = &self.controls.voice;
        select.set_inner_html("");
        for voice in &voices {
            let option = self.controls.document.create_element("option")?;
            option.set_text_content(Some(&voice.label()));
            option.set_attribute("data-lang", &voice.lang)?;
            option.set_attribute("data-name", &voice.name)?;
            select.append_child(&option)?;
        }
        select.set_disabled(false);

        let mut state = self.state.borrow_mut();
        state.voices.replace(voices);
        state.platform_voices = platform;
        Ok(())
    }

    fn sync_controls(&self) {
        let controls = self.state.borrow().editor.controls();
        self.controls.generate.set_disabled(!controls.generate);
        self.controls.clear.set_disabled(!controls.clear);
        self.controls.read.set_disabled(!controls.read);
    }
}
