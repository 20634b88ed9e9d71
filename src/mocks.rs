//! In-memory test doubles for the capability traits.
//!
//! Each mock records its calls behind `parking_lot` mutexes so tests can
//! assert call/no-call effects and recorded arguments. Configured failures
//! are produced as [`Error::Remote`] so wrapped messages render the raw
//! cause verbatim, the way a real remote failure would.

// ============================================================================
// Imports
// ============================================================================

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::element::{Element, ElementSource};
use crate::error::{Error, Result};
use crate::repository::ElementRepository;
use crate::selector::{Locator, Selector};
use crate::session::{Offset, Session};

// ============================================================================
// Call Cells
// ============================================================================

/// Records a no-argument, no-result call.
#[derive(Debug, Default)]
pub(crate) struct ActionCall {
    called: Mutex<bool>,
    err: Mutex<Option<String>>,
}

impl ActionCall {
    pub(crate) fn fail(&self, message: &str) {
        *self.err.lock() = Some(message.to_string());
    }

    pub(crate) fn called(&self) -> bool {
        *self.called.lock()
    }

    fn invoke(&self) -> Result<()> {
        *self.called.lock() = true;
        match self.err.lock().as_deref() {
            Some(message) => Err(Error::remote(message)),
            None => Ok(()),
        }
    }
}

/// Records a call returning a configured value.
#[derive(Debug, Default)]
pub(crate) struct GetCall<T> {
    value: Mutex<T>,
    err: Mutex<Option<String>>,
}

impl<T: Clone + Default> GetCall<T> {
    pub(crate) fn ret(&self, value: impl Into<T>) {
        *self.value.lock() = value.into();
    }

    pub(crate) fn fail(&self, message: &str) {
        *self.err.lock() = Some(message.to_string());
    }

    fn invoke(&self) -> Result<T> {
        match self.err.lock().as_deref() {
            Some(message) => Err(Error::remote(message)),
            None => Ok(self.value.lock().clone()),
        }
    }
}

/// Records an attribute lookup and the requested attribute name.
#[derive(Debug, Default)]
pub(crate) struct AttributeCall {
    name: Mutex<Option<String>>,
    value: Mutex<Option<String>>,
    err: Mutex<Option<String>>,
}

impl AttributeCall {
    pub(crate) fn ret(&self, value: &str) {
        *self.value.lock() = Some(value.to_string());
    }

    pub(crate) fn fail(&self, message: &str) {
        *self.err.lock() = Some(message.to_string());
    }

    pub(crate) fn name(&self) -> Option<String> {
        self.name.lock().clone()
    }

    fn invoke(&self, name: &str) -> Result<Option<String>> {
        *self.name.lock() = Some(name.to_string());
        match self.err.lock().as_deref() {
            Some(message) => Err(Error::remote(message)),
            None => Ok(self.value.lock().clone()),
        }
    }
}

/// Records the text entered by a set-value call.
#[derive(Debug, Default)]
pub(crate) struct TextCall {
    text: Mutex<Option<String>>,
    err: Mutex<Option<String>>,
}

impl TextCall {
    pub(crate) fn fail(&self, message: &str) {
        *self.err.lock() = Some(message.to_string());
    }

    pub(crate) fn text(&self) -> Option<String> {
        self.text.lock().clone()
    }

    fn invoke(&self, text: &str) -> Result<()> {
        *self.text.lock() = Some(text.to_string());
        match self.err.lock().as_deref() {
            Some(message) => Err(Error::remote(message)),
            None => Ok(()),
        }
    }
}

/// Records a sub-element lookup and the locator it was given.
#[derive(Debug, Default)]
pub(crate) struct ElementsCall {
    locator: Mutex<Option<Locator>>,
    elements: Mutex<Vec<MockElement>>,
    err: Mutex<Option<String>>,
}

impl ElementsCall {
    pub(crate) fn ret(&self, elements: Vec<MockElement>) {
        *self.elements.lock() = elements;
    }

    pub(crate) fn fail(&self, message: &str) {
        *self.err.lock() = Some(message.to_string());
    }

    pub(crate) fn locator(&self) -> Option<Locator> {
        self.locator.lock().clone()
    }

    fn invoke(&self, locator: &Locator) -> Result<Vec<Box<dyn Element>>> {
        *self.locator.lock() = Some(locator.clone());
        match self.err.lock().as_deref() {
            Some(message) => Err(Error::remote(message)),
            None => Ok(boxed(&self.elements.lock())),
        }
    }
}

/// Records a mouse-move call, the target element, and the offset.
#[derive(Default)]
pub(crate) struct MoveToCall {
    called: Mutex<bool>,
    element_id: Mutex<Option<String>>,
    offset: Mutex<Option<Offset>>,
    err: Mutex<Option<String>>,
}

impl MoveToCall {
    pub(crate) fn fail(&self, message: &str) {
        *self.err.lock() = Some(message.to_string());
    }

    pub(crate) fn called(&self) -> bool {
        *self.called.lock()
    }

    pub(crate) fn element_id(&self) -> Option<String> {
        self.element_id.lock().clone()
    }

    pub(crate) fn offset(&self) -> Option<Offset> {
        *self.offset.lock()
    }

    fn invoke(&self, element: &dyn Element, offset: Option<Offset>) -> Result<()> {
        *self.called.lock() = true;
        *self.element_id.lock() = Some(element.id().to_string());
        *self.offset.lock() = offset;
        match self.err.lock().as_deref() {
            Some(message) => Err(Error::remote(message)),
            None => Ok(()),
        }
    }
}

/// Records a repository resolution call.
#[derive(Default)]
pub(crate) struct ResolveCall {
    elements: Mutex<Vec<MockElement>>,
    err: Mutex<Option<String>>,
}

impl ResolveCall {
    pub(crate) fn ret(&self, elements: Vec<MockElement>) {
        *self.elements.lock() = elements;
    }

    pub(crate) fn fail(&self, message: &str) {
        *self.err.lock() = Some(message.to_string());
    }

    fn invoke(&self) -> Result<Vec<Box<dyn Element>>> {
        match self.err.lock().as_deref() {
            Some(message) => Err(Error::remote(message)),
            None => Ok(boxed(&self.elements.lock())),
        }
    }

    fn invoke_one(&self) -> Result<Box<dyn Element>> {
        if let Some(message) = self.err.lock().as_deref() {
            return Err(Error::remote(message));
        }
        self.elements
            .lock()
            .first()
            .map(|element| Box::new(element.clone()) as Box<dyn Element>)
            .ok_or(Error::ElementNotFound)
    }
}

fn boxed(elements: &[MockElement]) -> Vec<Box<dyn Element>> {
    elements
        .iter()
        .map(|element| Box::new(element.clone()) as Box<dyn Element>)
        .collect()
}

// ============================================================================
// MockElement
// ============================================================================

/// In-memory element handle sharing its recorded state across clones.
#[derive(Debug, Clone, Default)]
pub(crate) struct MockElement {
    inner: Arc<MockElementInner>,
}

#[derive(Debug, Default)]
struct MockElementInner {
    id: String,
    click: ActionCall,
    clear: ActionCall,
    submit: ActionCall,
    set_value: TextCall,
    text: GetCall<String>,
    tag_name: GetCall<String>,
    attribute: AttributeCall,
    is_selected: GetCall<bool>,
    is_displayed: GetCall<bool>,
    is_enabled: GetCall<bool>,
    elements: ElementsCall,
}

impl MockElement {
    pub(crate) fn with_id(id: &str) -> Self {
        Self {
            inner: Arc::new(MockElementInner {
                id: id.to_string(),
                ..Default::default()
            }),
        }
    }

    pub(crate) fn click_call(&self) -> &ActionCall {
        &self.inner.click
    }

    pub(crate) fn clear_call(&self) -> &ActionCall {
        &self.inner.clear
    }

    pub(crate) fn submit_call(&self) -> &ActionCall {
        &self.inner.submit
    }

    pub(crate) fn set_value_call(&self) -> &TextCall {
        &self.inner.set_value
    }

    pub(crate) fn text_call(&self) -> &GetCall<String> {
        &self.inner.text
    }

    pub(crate) fn tag_name_call(&self) -> &GetCall<String> {
        &self.inner.tag_name
    }

    pub(crate) fn attribute_call(&self) -> &AttributeCall {
        &self.inner.attribute
    }

    pub(crate) fn is_selected_call(&self) -> &GetCall<bool> {
        &self.inner.is_selected
    }

    pub(crate) fn is_displayed_call(&self) -> &GetCall<bool> {
        &self.inner.is_displayed
    }

    pub(crate) fn is_enabled_call(&self) -> &GetCall<bool> {
        &self.inner.is_enabled
    }

    pub(crate) fn elements_call(&self) -> &ElementsCall {
        &self.inner.elements
    }
}

#[async_trait]
impl ElementSource for MockElement {
    async fn elements(&self, locator: &Locator) -> Result<Vec<Box<dyn Element>>> {
        self.inner.elements.invoke(locator)
    }
}

#[async_trait]
impl Element for MockElement {
    fn id(&self) -> &str {
        &self.inner.id
    }

    async fn click(&self) -> Result<()> {
        self.inner.click.invoke()
    }

    async fn clear(&self) -> Result<()> {
        self.inner.clear.invoke()
    }

    async fn set_value(&self, value: &str) -> Result<()> {
        self.inner.set_value.invoke(value)
    }

    async fn submit(&self) -> Result<()> {
        self.inner.submit.invoke()
    }

    async fn text(&self) -> Result<String> {
        self.inner.text.invoke()
    }

    async fn tag_name(&self) -> Result<String> {
        self.inner.tag_name.invoke()
    }

    async fn attribute(&self, name: &str) -> Result<Option<String>> {
        self.inner.attribute.invoke(name)
    }

    async fn is_selected(&self) -> Result<bool> {
        self.inner.is_selected.invoke()
    }

    async fn is_displayed(&self) -> Result<bool> {
        self.inner.is_displayed.invoke()
    }

    async fn is_enabled(&self) -> Result<bool> {
        self.inner.is_enabled.invoke()
    }
}

// ============================================================================
// MockSession
// ============================================================================

/// In-memory session sharing its recorded state across clones.
#[derive(Clone, Default)]
pub(crate) struct MockSession {
    inner: Arc<MockSessionInner>,
}

#[derive(Default)]
struct MockSessionInner {
    move_to: MoveToCall,
    double_click: ActionCall,
}

impl MockSession {
    pub(crate) fn move_to_call(&self) -> &MoveToCall {
        &self.inner.move_to
    }

    pub(crate) fn double_click_call(&self) -> &ActionCall {
        &self.inner.double_click
    }
}

#[async_trait]
impl Session for MockSession {
    async fn move_to(&self, element: &dyn Element, offset: Option<Offset>) -> Result<()> {
        self.inner.move_to.invoke(element, offset)
    }

    async fn double_click(&self) -> Result<()> {
        self.inner.double_click.invoke()
    }
}

// ============================================================================
// MockRepository
// ============================================================================

/// In-memory repository sharing its recorded state across clones.
#[derive(Clone, Default)]
pub(crate) struct MockRepository {
    inner: Arc<MockRepositoryInner>,
}

#[derive(Default)]
struct MockRepositoryInner {
    get: ResolveCall,
    at_least_one: ResolveCall,
    exactly_one: ResolveCall,
}

impl MockRepository {
    pub(crate) fn get_call(&self) -> &ResolveCall {
        &self.inner.get
    }

    pub(crate) fn at_least_one_call(&self) -> &ResolveCall {
        &self.inner.at_least_one
    }

    pub(crate) fn exactly_one_call(&self) -> &ResolveCall {
        &self.inner.exactly_one
    }
}

#[async_trait]
impl ElementRepository for MockRepository {
    async fn get(&self, _selector: &Selector) -> Result<Vec<Box<dyn Element>>> {
        self.inner.get.invoke()
    }

    async fn get_at_least_one(&self, _selector: &Selector) -> Result<Vec<Box<dyn Element>>> {
        self.inner.at_least_one.invoke()
    }

    async fn get_exactly_one(&self, _selector: &Selector) -> Result<Box<dyn Element>> {
        self.inner.exactly_one.invoke_one()
    }
}
