//! Study Area Component
//!
//! Technology catalogue and the section-by-section study view.

use leptos::*;
use wasm_bindgen::{JsCast, JsValue};

use studydesk::content::{self, Section, Technology};
use studydesk::dashboard::{CopyFeedback, StudyView, COPY_FEEDBACK_MS};

use crate::state::global::GlobalState;

/// Learner study area: catalogue first, then the chosen document
#[component]
pub fn StudyArea(study: RwSignal<StudyView>) -> impl IntoView {
    let copied = create_rw_signal(CopyFeedback::default());

    view! {
        {move || match study.get() {
            StudyView::Home => view! { <Catalog study=study /> }.into_view(),
            StudyView::Study { document, sections } => view! {
                <div class="space-y-6">
                    <p class="text-gray-500">{document.description}</p>
                    {sections.into_iter().map(|section| view! {
                        <SectionCard section=section language=document.language copied=copied />
                    }).collect_view()}
                </div>
            }.into_view(),
        }}
    }
}

#[component]
fn Catalog(study: RwSignal<StudyView>) -> impl IntoView {
    view! {
        <div>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                {content::catalog().iter().map(|tech| view! {
                    <TechnologyTile technology=*tech study=study />
                }).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn TechnologyTile(technology: Technology, study: RwSignal<StudyView>) -> impl IntoView {
    let cursor = if technology.available {
        "cursor-pointer hover:shadow-lg"
    } else {
        "opacity-60 cursor-not-allowed"
    };

    view! {
        <div
            class=format!("bg-white rounded-lg shadow transition {}", cursor)
            on:click=move |_| {
                study.update(|view| {
                    view.select(&technology);
                });
            }
        >
            <div class=format!("h-24 rounded-t-lg bg-gradient-to-r {} flex items-center justify-center text-4xl", technology.accent)>
                {technology.icon}
            </div>
            <div class="p-4">
                <h3 class="text-lg font-semibold">{technology.name}</h3>
                <p class="text-sm text-gray-500">{technology.description}</p>
                {technology.available.then(|| view! {
                    <span class="inline-block mt-2 px-3 py-1 text-xs bg-green-100 text-green-800 rounded-full">
                        "✓ Available"
                    </span>
                })}
                {(!technology.available).then(|| view! {
                    <span class="inline-block mt-2 px-3 py-1 text-xs bg-gray-100 text-gray-600 rounded-full">
                        "🔒 Coming Soon"
                    </span>
                })}
            </div>
        </div>
    }
}

#[component]
fn SectionCard(
    section: Section,
    language: &'static str,
    copied: RwSignal<CopyFeedback>,
) -> impl IntoView {
    let Section {
        title, theory, code, ..
    } = section;

    view! {
        <div class="bg-white rounded-lg shadow p-6 space-y-4">
            <h3 class="text-xl font-semibold">{title}</h3>
            {(!theory.is_empty()).then(|| view! {
                <div>
                    <h4 class="text-sm font-semibold text-indigo-600 uppercase mb-1">"Theory"</h4>
                    <p class="text-gray-700 whitespace-pre-line">{theory}</p>
                </div>
            })}
            {(!code.is_empty()).then(|| view! {
                <CodeBlock code=code language=language copied=copied />
            })}
        </div>
    }
}

#[component]
fn CodeBlock(code: String, language: &'static str, copied: RwSignal<CopyFeedback>) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let code_for_label = code.clone();
    let code_for_copy = code.clone();

    let copy = move |_| {
        let code = code_for_copy.clone();
        let state = state.clone();
        spawn_local(async move {
            match write_clipboard(&code).await {
                Ok(()) => {
                    copied.update(|c| c.mark(&code));
                    gloo_timers::callback::Timeout::new(COPY_FEEDBACK_MS, move || {
                        copied.update(|c| c.expire(&code));
                    })
                    .forget();
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to copy code: {:?}", e).into());
                    state.show_error("Failed to copy code");
                }
            }
        });
    };

    view! {
        <div class="rounded-md overflow-hidden">
            <div class="flex items-center justify-between bg-gray-800 px-4 py-2 text-sm text-gray-300">
                <span>{language}</span>
                <button class="hover:text-white" on:click=copy>
                    {move || copied.with(|c| c.label_for(&code_for_label))}
                </button>
            </div>
            <pre class="bg-gray-900 text-green-300 p-4 text-sm overflow-x-auto"><code>{code}</code></pre>
        </div>
    }
}

/// `navigator.clipboard.writeText`, looked up dynamically
async fn write_clipboard(text: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let clipboard = js_sys::Reflect::get(&window.navigator(), &"clipboard".into())?;
    let write_text: js_sys::Function =
        js_sys::Reflect::get(&clipboard, &"writeText".into())?.dyn_into()?;
    let promise: js_sys::Promise = write_text.call1(&clipboard, &text.into())?.dyn_into()?;
    wasm_bindgen_futures::JsFuture::from(promise).await?;
    Ok(())
}
