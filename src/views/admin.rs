use crate::admin::{
    AdminAction, AdminSection, CategoryForm, DestinationForm, Outcome, ProductForm,
    VillageInfoForm, VisitorForm,
};
use crate::links::format_rupiah;
use crate::store::{
    Row, StoreResult, delete_record, fetch_categories, fetch_destinations, fetch_products,
    fetch_village_info, fetch_weekly_visitors, save_record,
};
use crate::theme::ThemeMode;
use crate::ui::{AppContext, Page, Wordmark};
use crate::views::shared::{Loading, confirm};
use dioxus::prelude::*;

#[component]
pub fn AdminView() -> Element {
    let ctx = use_context::<AppContext>();
    let active = use_signal(|| AdminSection::Destinations);

    rsx! {
        div { class: "admin-page",
            div { class: "header",
                div { class: "header-content",
                    button {
                        class: "btn btn-outline",
                        r#type: "button",
                        onclick: move |_| ctx.navigate(Page::Home),
                        "← Kembali ke Website"
                    }
                    h1 { class: "admin-title",
                        "🛡 Admin Panel "
                        Wordmark { theme: ThemeMode::Admin }
                    }
                }
                div { class: "tabs",
                    for section in AdminSection::ALL {
                        TabButton { key: "{section.label()}", active, section }
                    }
                }
            }
            div { class: "tab-panels",
                TabPanel { active, section: AdminSection::Destinations, children: rsx!( DestinationsPanel {} ) }
                TabPanel { active, section: AdminSection::Products, children: rsx!( ProductsPanel {} ) }
                TabPanel { active, section: AdminSection::Categories, children: rsx!( CategoriesPanel {} ) }
                TabPanel { active, section: AdminSection::Visitors, children: rsx!( VisitorsPanel {} ) }
                TabPanel { active, section: AdminSection::VillageInfo, children: rsx!( VillageInfoPanel {} ) }
            }
        }
    }
}

#[component]
fn TabPanel(active: Signal<AdminSection>, section: AdminSection, children: Element) -> Element {
    if active() != section {
        return rsx! {};
    }
    rsx! {
        div { class: "tab-panel active", {children} }
    }
}

#[component]
fn TabButton(active: Signal<AdminSection>, section: AdminSection) -> Element {
    let mut active = active;
    let class = if active() == section { "tab active" } else { "tab" };
    rsx! {
        button {
            class: class,
            r#type: "button",
            onclick: move |_| active.set(section),
            "{section.label()}"
        }
    }
}

/// Form signals for one admin tab.
struct Editor<F: 'static> {
    form: Signal<F>,
    editing: Signal<Option<String>>,
    open: Signal<bool>,
}

impl<F: 'static> Clone for Editor<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: 'static> Copy for Editor<F> {}

fn use_editor<F: Default + 'static>() -> Editor<F> {
    Editor {
        form: use_signal(F::default),
        editing: use_signal(|| None),
        open: use_signal(|| false),
    }
}

impl<F: Default + 'static> Editor<F> {
    fn start_new(mut self) {
        self.form.set(F::default());
        self.editing.set(None);
        self.open.set(true);
    }

    fn start_edit(mut self, id: String, form: F) {
        self.form.set(form);
        self.editing.set(Some(id));
        self.open.set(true);
    }

    fn close(mut self) {
        self.open.set(false);
        self.editing.set(None);
        self.form.set(F::default());
    }

    fn is_editing(&self) -> bool {
        self.editing.read().is_some()
    }
}

fn loaded<T: Default>(ctx: &AppContext, section: AdminSection, result: StoreResult<T>) -> T {
    result.unwrap_or_else(|err| {
        tracing::error!(error = %err, table = section.table(), "admin load failed");
        ctx.error(section.error_message(AdminAction::Load));
        T::default()
    })
}

fn save<F, T>(section: AdminSection, editor: Editor<F>, payload: Row, mut rows: Resource<T>)
where
    F: Default + 'static,
    T: 'static,
{
    let ctx = consume_context::<AppContext>();
    let id = editor.editing.peek().clone();
    let outcome = if id.is_some() {
        Outcome::Updated
    } else {
        Outcome::Created
    };
    spawn(async move {
        match save_record(ctx.store.as_ref(), section.table(), id.as_deref(), payload).await {
            Ok(()) => {
                ctx.success(section.success_message(outcome));
                editor.close();
                rows.restart();
            }
            Err(err) => {
                tracing::error!(error = %err, table = section.table(), "admin save failed");
                ctx.error(section.error_message(AdminAction::Save));
            }
        }
    });
}

fn remove<T: 'static>(section: AdminSection, id: String, mut rows: Resource<T>) {
    let ctx = consume_context::<AppContext>();
    spawn(async move {
        if !confirm(section.delete_prompt()).await {
            return;
        }
        match delete_record(ctx.store.as_ref(), section.table(), &id).await {
            Ok(()) => {
                ctx.success(section.success_message(Outcome::Deleted));
                rows.restart();
            }
            Err(err) => {
                tracing::error!(error = %err, table = section.table(), id = %id, "admin delete failed");
                ctx.error(section.error_message(AdminAction::Delete));
            }
        }
    });
}

#[component]
fn Field(
    label: &'static str,
    value: String,
    on_input: EventHandler<String>,
    #[props(default = "text")] kind: &'static str,
    #[props(default)] multiline: bool,
    #[props(default)] required: bool,
) -> Element {
    rsx! {
        label { class: "field",
            span { class: "field-label", "{label}" }
            if multiline {
                textarea {
                    rows: "4",
                    value: "{value}",
                    required,
                    oninput: move |ev| on_input.call(ev.value()),
                }
            } else {
                input {
                    r#type: kind,
                    value: "{value}",
                    required,
                    oninput: move |ev| on_input.call(ev.value()),
                }
            }
        }
    }
}

#[component]
fn FormActions(editing: bool, on_save: EventHandler<()>, on_cancel: EventHandler<()>) -> Element {
    rsx! {
        div { class: "form-actions",
            button {
                class: "btn btn-primary",
                r#type: "button",
                onclick: move |_| on_save.call(()),
                if editing { "Perbarui" } else { "Simpan" }
            }
            button {
                class: "btn btn-outline",
                r#type: "button",
                onclick: move |_| on_cancel.call(()),
                "Batal"
            }
        }
    }
}

#[component]
fn RecordRow(
    title: String,
    detail: String,
    swatch: Option<String>,
    on_edit: EventHandler<()>,
    on_delete: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "record-row",
            div { class: "record-text",
                div { class: "record-title",
                    if let Some(color) = swatch {
                        span { class: "swatch", style: "background-color: {color};" }
                    }
                    "{title}"
                }
                if !detail.is_empty() {
                    div { class: "record-detail text-muted", "{detail}" }
                }
            }
            div { class: "record-actions",
                button {
                    class: "btn btn-outline btn-small",
                    r#type: "button",
                    onclick: move |_| on_edit.call(()),
                    "✏ Edit"
                }
                button {
                    class: "btn btn-danger btn-small",
                    r#type: "button",
                    onclick: move |_| on_delete.call(()),
                    "🗑 Hapus"
                }
            }
        }
    }
}

#[component]
fn PanelHeader(title: &'static str, add_label: &'static str, on_add: EventHandler<()>) -> Element {
    rsx! {
        div { class: "panel-header",
            h2 { "{title}" }
            button {
                class: "btn btn-primary",
                r#type: "button",
                onclick: move |_| on_add.call(()),
                "＋ {add_label}"
            }
        }
    }
}

#[component]
fn DestinationsPanel() -> Element {
    const SECTION: AdminSection = AdminSection::Destinations;
    let ctx = use_context::<AppContext>();
    let rows = use_resource(move || {
        let ctx = ctx.clone();
        async move {
            let result = fetch_destinations(ctx.store.as_ref()).await;
            loaded(&ctx, SECTION, result)
        }
    });
    let editor = use_editor::<DestinationForm>();
    let mut form = editor.form;
    let current = form();

    rsx! {
        section { class: "admin-panel card",
            PanelHeader {
                title: "Kelola Destinasi Wisata",
                add_label: "Tambah Destinasi",
                on_add: move |_| editor.start_new(),
            }
            if (editor.open)() {
                div { class: "admin-form",
                    Field { label: "Nama Destinasi", value: current.name.clone(), required: true,
                        on_input: move |v| form.with_mut(|f| f.name = v) }
                    Field { label: "Deskripsi", value: current.description.clone(), multiline: true,
                        on_input: move |v| form.with_mut(|f| f.description = v) }
                    Field { label: "URL Google Maps", value: current.maps_url.clone(), kind: "url",
                        on_input: move |v| form.with_mut(|f| f.maps_url = v) }
                    Field { label: "URL Gambar", value: current.image_url.clone(), kind: "url",
                        on_input: move |v| form.with_mut(|f| f.image_url = v) }
                    FormActions {
                        editing: editor.is_editing(),
                        on_save: move |_| save(SECTION, editor, form.peek().payload(), rows),
                        on_cancel: move |_| editor.close(),
                    }
                }
            }
            match &*rows.read_unchecked() {
                None => rsx! { Loading {} },
                Some(list) => rsx! {
                    for destination in list.iter() {
                        RecordRow {
                            key: "{destination.id}",
                            title: destination.name.clone(),
                            detail: destination.description_text().to_string(),
                            on_edit: {
                                let destination = destination.clone();
                                move |_| editor.start_edit(destination.id.clone(), DestinationForm::from_record(&destination))
                            },
                            on_delete: {
                                let id = destination.id.clone();
                                move |_| remove(SECTION, id.clone(), rows)
                            },
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn ProductsPanel() -> Element {
    const SECTION: AdminSection = AdminSection::Products;
    let ctx = use_context::<AppContext>();
    let rows = {
        let ctx = ctx.clone();
        use_resource(move || {
            let ctx = ctx.clone();
            async move {
                let result = fetch_products(ctx.store.as_ref()).await;
                loaded(&ctx, SECTION, result)
            }
        })
    };
    let categories = use_resource(move || {
        let ctx = ctx.clone();
        async move {
            let result = fetch_categories(ctx.store.as_ref()).await;
            loaded(&ctx, AdminSection::Categories, result)
        }
    });
    let editor = use_editor::<ProductForm>();
    let mut form = editor.form;
    let current = form();
    let category_options = categories.read().as_ref().cloned().unwrap_or_default();

    rsx! {
        section { class: "admin-panel card",
            PanelHeader {
                title: "Kelola Produk UMKM",
                add_label: "Tambah Produk",
                on_add: move |_| editor.start_new(),
            }
            if (editor.open)() {
                div { class: "admin-form",
                    Field { label: "Nama Produk", value: current.name.clone(), required: true,
                        on_input: move |v| form.with_mut(|f| f.name = v) }
                    Field { label: "Deskripsi", value: current.description.clone(), multiline: true,
                        on_input: move |v| form.with_mut(|f| f.description = v) }
                    Field { label: "Harga (Rp)", value: current.price.clone(), kind: "number",
                        on_input: move |v| form.with_mut(|f| f.price = v) }
                    label { class: "field",
                        span { class: "field-label", "Kategori" }
                        select {
                            value: "{current.category_id}",
                            onchange: move |ev| form.with_mut(|f| f.category_id = ev.value()),
                            option { value: "", "Pilih kategori" }
                            for category in category_options.iter() {
                                option {
                                    key: "{category.id}",
                                    value: "{category.id}",
                                    selected: category.id == current.category_id,
                                    "{category.name}"
                                }
                            }
                        }
                    }
                    Field { label: "URL Gambar", value: current.image_url.clone(), kind: "url",
                        on_input: move |v| form.with_mut(|f| f.image_url = v) }
                    Field { label: "Nomor WhatsApp", value: current.whatsapp_number.clone(), kind: "tel",
                        on_input: move |v| form.with_mut(|f| f.whatsapp_number = v) }
                    FormActions {
                        editing: editor.is_editing(),
                        on_save: move |_| save(SECTION, editor, form.peek().payload(), rows),
                        on_cancel: move |_| editor.close(),
                    }
                }
            }
            match &*rows.read_unchecked() {
                None => rsx! { Loading {} },
                Some(list) => rsx! {
                    for listing in list.iter() {
                        RecordRow {
                            key: "{listing.product.id}",
                            title: listing.product.name.clone(),
                            detail: format!(
                                "{} · {}",
                                listing.category_name,
                                format_rupiah(listing.product.price.unwrap_or(0.0))
                            ),
                            swatch: Some(listing.category_color.clone()),
                            on_edit: {
                                let listing = listing.clone();
                                move |_| editor.start_edit(listing.product.id.clone(), ProductForm::from_record(&listing))
                            },
                            on_delete: {
                                let id = listing.product.id.clone();
                                move |_| remove(SECTION, id.clone(), rows)
                            },
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn CategoriesPanel() -> Element {
    const SECTION: AdminSection = AdminSection::Categories;
    let ctx = use_context::<AppContext>();
    let rows = use_resource(move || {
        let ctx = ctx.clone();
        async move {
            let result = fetch_categories(ctx.store.as_ref()).await;
            loaded(&ctx, SECTION, result)
        }
    });
    let editor = use_editor::<CategoryForm>();
    let mut form = editor.form;
    let current = form();

    rsx! {
        section { class: "admin-panel card",
            PanelHeader {
                title: "Kelola Kategori UMKM",
                add_label: "Tambah Kategori",
                on_add: move |_| editor.start_new(),
            }
            if (editor.open)() {
                div { class: "admin-form",
                    Field { label: "Nama Kategori", value: current.name.clone(), required: true,
                        on_input: move |v| form.with_mut(|f| f.name = v) }
                    div { class: "field-row",
                        Field { label: "Warna", value: current.color.clone(), kind: "color",
                            on_input: move |v| form.with_mut(|f| f.color = v) }
                        Field { label: "Kode Warna", value: current.color.clone(),
                            on_input: move |v| form.with_mut(|f| f.color = v) }
                    }
                    FormActions {
                        editing: editor.is_editing(),
                        on_save: move |_| save(SECTION, editor, form.peek().payload(), rows),
                        on_cancel: move |_| editor.close(),
                    }
                }
            }
            match &*rows.read_unchecked() {
                None => rsx! { Loading {} },
                Some(list) => rsx! {
                    for category in list.iter() {
                        RecordRow {
                            key: "{category.id}",
                            title: category.name.clone(),
                            detail: category.color.clone().unwrap_or_default(),
                            swatch: category.color.clone(),
                            on_edit: {
                                let category = category.clone();
                                move |_| editor.start_edit(category.id.clone(), CategoryForm::from_record(&category))
                            },
                            on_delete: {
                                let id = category.id.clone();
                                move |_| remove(SECTION, id.clone(), rows)
                            },
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn VisitorsPanel() -> Element {
    const SECTION: AdminSection = AdminSection::Visitors;
    let ctx = use_context::<AppContext>();
    let rows = use_resource(move || {
        let ctx = ctx.clone();
        async move {
            let result = fetch_weekly_visitors(ctx.store.as_ref(), false).await;
            loaded(&ctx, SECTION, result)
        }
    });
    let editor = use_editor::<VisitorForm>();
    let mut form = editor.form;
    let current = form();

    rsx! {
        section { class: "admin-panel card",
            PanelHeader {
                title: "Kelola Data Pengunjung",
                add_label: "Tambah Data",
                on_add: move |_| editor.start_new(),
            }
            if (editor.open)() {
                div { class: "admin-form",
                    Field { label: "Tanggal Awal Minggu", value: current.week_start.clone(), kind: "date", required: true,
                        on_input: move |v| form.with_mut(|f| f.week_start = v) }
                    Field { label: "Jumlah Pengunjung", value: current.visitor_count.clone(), kind: "number", required: true,
                        on_input: move |v| form.with_mut(|f| f.visitor_count = v) }
                    FormActions {
                        editing: editor.is_editing(),
                        on_save: move |_| save(SECTION, editor, form.peek().payload(), rows),
                        on_cancel: move |_| editor.close(),
                    }
                }
            }
            match &*rows.read_unchecked() {
                None => rsx! { Loading {} },
                Some(list) => rsx! {
                    for week in list.iter() {
                        RecordRow {
                            key: "{week.id}",
                            title: format!("Minggu {}", week.week_start),
                            detail: week
                                .visitor_count
                                .map(|count| format!("{count} pengunjung"))
                                .unwrap_or_else(|| "-".to_string()),
                            on_edit: {
                                let week = week.clone();
                                move |_| editor.start_edit(week.id.clone(), VisitorForm::from_record(&week))
                            },
                            on_delete: {
                                let id = week.id.clone();
                                move |_| remove(SECTION, id.clone(), rows)
                            },
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn VillageInfoPanel() -> Element {
    const SECTION: AdminSection = AdminSection::VillageInfo;
    let ctx = use_context::<AppContext>();
    let rows = use_resource(move || {
        let ctx = ctx.clone();
        async move {
            let result = fetch_village_info(ctx.store.as_ref()).await;
            loaded(&ctx, SECTION, result)
        }
    });
    let editor = use_editor::<VillageInfoForm>();
    let mut form = editor.form;
    let current = form();

    rsx! {
        section { class: "admin-panel card",
            PanelHeader {
                title: "Kelola Informasi Desa",
                add_label: "Tambah Informasi",
                on_add: move |_| editor.start_new(),
            }
            if (editor.open)() {
                div { class: "admin-form",
                    Field { label: "Kunci Informasi", value: current.key.clone(), required: true,
                        on_input: move |v| form.with_mut(|f| f.key = v) }
                    Field { label: "Nilai/Konten", value: current.value.clone(), multiline: true, required: true,
                        on_input: move |v| form.with_mut(|f| f.value = v) }
                    FormActions {
                        editing: editor.is_editing(),
                        on_save: move |_| save(SECTION, editor, form.peek().payload(), rows),
                        on_cancel: move |_| editor.close(),
                    }
                }
            }
            match &*rows.read_unchecked() {
                None => rsx! { Loading {} },
                Some(list) => rsx! {
                    for info in list.iter() {
                        RecordRow {
                            key: "{info.id}",
                            title: info.key.clone(),
                            detail: info.value.clone().unwrap_or_default(),
                            on_edit: {
                                let info = info.clone();
                                move |_| editor.start_edit(info.id.clone(), VillageInfoForm::from_record(&info))
                            },
                            on_delete: {
                                let id = info.id.clone();
                                move |_| remove(SECTION, id.clone(), rows)
                            },
                        }
                    }
                },
            }
        }
    }
}
