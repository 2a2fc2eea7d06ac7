//! Shared fixtures for listener tests: a recording upload handler, fake
//! uploadable entities, and lifecycle-event fakes driven by a shared journal
//! so ordering between uploads and change-set recomputation can be asserted.

use std::any::TypeId;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use attacher_core::{
    AttachError, AttachResult, EntityDescriptor, FieldAttribute, FieldDescriptor, FieldMetadata,
    MappingConfig, Mappings, MetadataRegistry, PendingFile, UploadHandler, UploadTarget,
    Uploadable,
};
use attacher_orm::{LifecycleEvent, UpdateEvent, UploadListener};

pub type Journal = Arc<Mutex<Vec<String>>>;

pub fn new_journal() -> Journal {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn journal_entries(journal: &Journal) -> Vec<String> {
    journal.lock().unwrap().clone()
}

/// Upload handler double: records each invocation in the journal, consumes
/// the staged file, and writes derived attributes through the declared
/// companion properties. Fails without recording when asked to.
pub struct RecordingHandler {
    pub journal: Journal,
    pub fail_on: Option<String>,
}

#[async_trait]
impl UploadHandler for RecordingHandler {
    async fn upload(
        &self,
        target: &mut dyn UploadTarget,
        field: &FieldMetadata,
    ) -> AttachResult<()> {
        if self.fail_on.as_deref() == Some(field.property.as_str()) {
            return Err(anyhow::anyhow!("storage offline").into());
        }

        self.journal
            .lock()
            .unwrap()
            .push(format!("upload:{}", field.property));

        let Some(file) = target.take_pending_file(&field.property) else {
            return Ok(());
        };

        if let Some(property) = &field.file_name_property {
            let stored = format!("stored-{}", file.original_name);
            target.set_attribute(property, FieldAttribute::StoredName(stored))?;
        }
        if let Some(property) = &field.size_property {
            target.set_attribute(property, FieldAttribute::Size(file.size()))?;
        }
        if let Some(property) = &field.mime_type_property {
            if let Some(content_type) = &file.content_type {
                target.set_attribute(property, FieldAttribute::ContentType(content_type.clone()))?;
            }
        }
        if let Some(property) = &field.original_name_property {
            target.set_attribute(property, FieldAttribute::OriginalName(file.original_name))?;
        }
        Ok(())
    }
}

/// Flat entity with two uploadable fields.
#[derive(Default)]
pub struct Article {
    pub image: Option<PendingFile>,
    pub image_name: Option<String>,
    pub image_size: Option<u64>,
    pub cover: Option<PendingFile>,
    pub cover_name: Option<String>,
}

impl Article {
    pub fn with_staged_files() -> Self {
        Article {
            image: Some(PendingFile::new("cat.jpg", &b"\xff\xd8\xff\xe0"[..])),
            cover: Some(PendingFile::new("cover.png", &b"\x89PNG"[..])),
            ..Article::default()
        }
    }
}

impl Uploadable for Article {
    fn describe() -> EntityDescriptor {
        EntityDescriptor::new("Article")
            .field(
                FieldDescriptor::new("image", "article_images")
                    .file_name_property("image_name")
                    .size_property("image_size"),
            )
            .field(FieldDescriptor::new("cover", "article_images").file_name_property("cover_name"))
    }
}

impl UploadTarget for Article {
    fn take_pending_file(&mut self, property: &str) -> Option<PendingFile> {
        match property {
            "image" => self.image.take(),
            "cover" => self.cover.take(),
            _ => None,
        }
    }

    fn set_attribute(&mut self, property: &str, value: FieldAttribute) -> AttachResult<()> {
        match (property, value) {
            ("image_name", FieldAttribute::StoredName(name)) => self.image_name = Some(name),
            ("image_size", FieldAttribute::Size(size)) => self.image_size = Some(size),
            ("cover_name", FieldAttribute::StoredName(name)) => self.cover_name = Some(name),
            (property, _) => {
                return Err(AttachError::UnknownProperty {
                    entity: "Article".to_string(),
                    property: property.to_string(),
                })
            }
        }
        Ok(())
    }
}

/// Embedded value object carrying its own uploadable field.
#[derive(Default)]
pub struct Photo {
    pub file: Option<PendingFile>,
    pub file_name: Option<String>,
}

impl Uploadable for Photo {
    fn describe() -> EntityDescriptor {
        EntityDescriptor::new("Photo")
            .field(FieldDescriptor::new("file", "photos").file_name_property("file_name"))
    }
}

/// Entity whose only uploadable field lives on an embedded value object.
#[derive(Default)]
pub struct Profile {
    pub photo: Photo,
}

impl Profile {
    pub fn with_staged_photo() -> Self {
        Profile {
            photo: Photo {
                file: Some(PendingFile::new("me.jpg", &b"\xff\xd8"[..])),
                file_name: None,
            },
        }
    }
}

impl Uploadable for Profile {
    fn describe() -> EntityDescriptor {
        EntityDescriptor::new("Profile").embedded("photo", Photo::describe)
    }
}

impl UploadTarget for Profile {
    fn take_pending_file(&mut self, property: &str) -> Option<PendingFile> {
        match property {
            "photo.file" => self.photo.file.take(),
            _ => None,
        }
    }

    fn set_attribute(&mut self, property: &str, value: FieldAttribute) -> AttachResult<()> {
        match (property, value) {
            ("photo.file_name", FieldAttribute::StoredName(name)) => {
                self.photo.file_name = Some(name)
            }
            (property, _) => {
                return Err(AttachError::UnknownProperty {
                    entity: "Profile".to_string(),
                    property: property.to_string(),
                })
            }
        }
        Ok(())
    }
}

/// Registered entity that declares no uploadable fields.
#[derive(Default)]
pub struct Gallery;

impl Uploadable for Gallery {
    fn describe() -> EntityDescriptor {
        EntityDescriptor::new("Gallery")
    }
}

impl UploadTarget for Gallery {
    fn take_pending_file(&mut self, _property: &str) -> Option<PendingFile> {
        None
    }

    fn set_attribute(&mut self, property: &str, _value: FieldAttribute) -> AttachResult<()> {
        Err(AttachError::UnknownProperty {
            entity: "Gallery".to_string(),
            property: property.to_string(),
        })
    }
}

/// Entity type that never enters the registry.
#[derive(Default)]
pub struct Note;

impl UploadTarget for Note {
    fn take_pending_file(&mut self, _property: &str) -> Option<PendingFile> {
        None
    }

    fn set_attribute(&mut self, property: &str, _value: FieldAttribute) -> AttachResult<()> {
        Err(AttachError::UnknownProperty {
            entity: "Note".to_string(),
            property: property.to_string(),
        })
    }
}

pub fn build_registry() -> Arc<MetadataRegistry> {
    let mappings = Mappings::new()
        .mapping(
            "article_images",
            MappingConfig::new("/var/uploads/articles").with_uri_prefix("/uploads/articles"),
        )
        .mapping("photos", MappingConfig::new("/var/uploads/photos"));

    let registry = MetadataRegistry::builder()
        .mappings(mappings)
        .register::<Article>()
        .register::<Profile>()
        .register::<Gallery>()
        .build()
        .expect("registry must build");

    Arc::new(registry)
}

pub fn listener_with(journal: Journal, fail_on: Option<&str>) -> UploadListener {
    let handler = RecordingHandler {
        journal,
        fail_on: fail_on.map(String::from),
    };
    UploadListener::new(build_registry(), Arc::new(handler))
}

/// Pre-insert event fake.
pub struct TestCreateEvent<'a, T: UploadTarget + 'static> {
    pub entity: &'a mut T,
    pub name: &'static str,
}

impl<T: UploadTarget + 'static> LifecycleEvent for TestCreateEvent<'_, T> {
    fn entity_type(&self) -> TypeId {
        TypeId::of::<T>()
    }

    fn entity_name(&self) -> &str {
        self.name
    }

    fn entity(&mut self) -> &mut dyn UploadTarget {
        &mut *self.entity
    }
}

/// Pre-update event fake; records recompute calls in the shared journal.
pub struct TestUpdateEvent<'a, T: UploadTarget + 'static> {
    pub entity: &'a mut T,
    pub name: &'static str,
    pub journal: Journal,
    pub recompute_calls: usize,
}

impl<T: UploadTarget + 'static> LifecycleEvent for TestUpdateEvent<'_, T> {
    fn entity_type(&self) -> TypeId {
        TypeId::of::<T>()
    }

    fn entity_name(&self) -> &str {
        self.name
    }

    fn entity(&mut self) -> &mut dyn UploadTarget {
        &mut *self.entity
    }
}

impl<T: UploadTarget + 'static> UpdateEvent for TestUpdateEvent<'_, T> {
    fn recompute_change_set(&mut self) {
        self.recompute_calls += 1;
        self.journal.lock().unwrap().push("recompute".to_string());
    }
}
