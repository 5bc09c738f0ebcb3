use contracts::shared::cart::CartItem;
use contracts::shared::lang::{Language, Text};
use contracts::shared::page::{Page, Screen};
use contracts::shared::session::Session;
use leptos::prelude::*;

/// Reactive wrapper around the one `Session` of the app.
/// All mutations go through `Session` methods.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub session: RwSignal<Session>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(Session::new()),
        }
    }

    pub fn lang(&self) -> Language {
        self.session.with(|s| s.language())
    }

    /// Picks the string of the current language
    pub fn t(&self, en: &'static str, ar: &'static str) -> &'static str {
        self.lang().pick(en, ar)
    }

    pub fn text(&self, text: Text) -> &'static str {
        text.get(self.lang())
    }

    pub fn page(&self) -> Page {
        self.session.with(|s| s.page())
    }

    /// Resolved screen that only notifies when the screen itself changes.
    /// Cart edits, language toggles and the checkout flag leave it quiet.
    pub fn screen_memo(&self) -> Memo<Screen> {
        let session = self.session;
        Memo::new(move |_| session.with(|s| s.screen()))
    }

    pub fn page_memo(&self) -> Memo<Page> {
        let session = self.session;
        Memo::new(move |_| session.with(|s| s.page()))
    }

    pub fn lang_memo(&self) -> Memo<Language> {
        let session = self.session;
        Memo::new(move |_| session.with(|s| s.language()))
    }

    pub fn navigate(&self, page: Page) {
        self.session.update(|s| s.navigate(page));
    }

    pub fn toggle_language(&self) {
        self.session.update(|s| s.toggle_language());
    }

    pub fn add_to_cart(&self, item: CartItem, redirect: bool) {
        self.session.update(|s| s.add_to_cart(item, redirect));
    }

    pub fn remove_from_cart(&self, id: &str) {
        self.session.update(|s| s.remove_from_cart(id));
    }

    pub fn cart_items(&self) -> Vec<CartItem> {
        self.session.with(|s| s.cart().items().to_vec())
    }

    pub fn cart_count(&self) -> u32 {
        self.session.with(|s| s.cart_count())
    }

    pub fn cart_total(&self) -> i64 {
        self.session.with(|s| s.cart().total())
    }

    /// Token for admin calls. Read untracked: a request never depends on it reactively.
    pub fn access_token(&self) -> Option<String> {
        self.session
            .with_untracked(|s| s.access_token().map(str::to_string))
    }

    pub fn login_succeeded(&self, access_token: String) {
        self.session.update(|s| s.login_succeeded(access_token));
    }

    pub fn cancel_login(&self) {
        self.session.update(|s| s.cancel_login());
    }

    pub fn logout(&self) {
        self.session.update(|s| s.logout());
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::cart::ItemKind;
    use leptos::reactive::owner::Owner;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counted<T>(source: Memo<T>, runs: Arc<AtomicUsize>) -> Memo<T>
    where
        T: Clone + PartialEq + Send + Sync + 'static,
    {
        Memo::new(move |_| {
            runs.fetch_add(1, Ordering::SeqCst);
            source.get()
        })
    }

    #[test]
    fn screen_stays_quiet_on_unrelated_session_writes() {
        let owner = Owner::new();
        owner.set();
        let app = AppGlobalContext::new();
        let runs = Arc::new(AtomicUsize::new(0));
        let screen = counted(app.screen_memo(), runs.clone());

        assert_eq!(screen.get(), Screen::Page(Page::Home));
        assert_eq!(runs.load(Ordering::SeqCst), 1);

        app.session.update(|s| s.checkout_pending = true);
        app.toggle_language();
        app.add_to_cart(
            CartItem::new("ticket-weekday", "Weekday Ticket", "تذكرة أيام الأسبوع", 89, ItemKind::Ticket),
            false,
        );
        app.session.update(|s| {
            s.clear_cart();
            s.checkout_pending = false;
        });
        assert_eq!(screen.get(), Screen::Page(Page::Home));
        assert_eq!(runs.load(Ordering::SeqCst), 1);

        app.navigate(Page::Cart);
        assert_eq!(screen.get(), Screen::Page(Page::Cart));
        assert_eq!(runs.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn page_and_language_memos_track_their_own_field() {
        let owner = Owner::new();
        owner.set();
        let app = AppGlobalContext::new();
        let page_runs = Arc::new(AtomicUsize::new(0));
        let lang_runs = Arc::new(AtomicUsize::new(0));
        let page = counted(app.page_memo(), page_runs.clone());
        let lang = counted(app.lang_memo(), lang_runs.clone());
        let _ = (page.get(), lang.get());

        app.toggle_language();
        assert_eq!(page.get(), Page::Home);
        assert_eq!(lang.get(), Language::Ar);
        assert_eq!(page_runs.load(Ordering::SeqCst), 1);
        assert_eq!(lang_runs.load(Ordering::SeqCst), 2);

        app.navigate(Page::Gallery);
        assert_eq!(page.get(), Page::Gallery);
        assert_eq!(lang.get(), Language::Ar);
        assert_eq!(page_runs.load(Ordering::SeqCst), 2);
        assert_eq!(lang_runs.load(Ordering::SeqCst), 2);
    }
}
