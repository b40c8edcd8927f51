// tests/support/mocks/store.rs
use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use quill_core::application::{
    ApplicationResult, error::ApplicationError, ports::health::StoreHealth,
};
use quill_core::domain::article::{
    Article, ArticleFilter, ArticleId, ArticlePredicate, ArticleReadRepository, ArticleSlug,
    ArticleWriteRepository, NewArticle,
};
use quill_core::domain::errors::{DomainError, DomainResult};
use quill_core::domain::favorite::FavoriteRepository;
use quill_core::domain::tag::{Tag, TagId, TagName, TagRepository};
use quill_core::domain::user::{User, UserDirectory, UserId, Username};

#[derive(Clone, Default)]
struct State {
    users: Vec<User>,
    tokens: HashMap<String, UserId>,
    articles: Vec<Article>,
    tags: Vec<Tag>,
    article_tags: BTreeSet<(ArticleId, TagId)>,
    favorites: BTreeSet<(UserId, ArticleId)>,
}

impl State {
    fn resolve_tag(&mut self, name: &TagName) -> DomainResult<Tag> {
        if let Some(tag) = self.tags.iter().find(|tag| &tag.name == name) {
            return Ok(tag.clone());
        }
        let tag = Tag {
            id: TagId::new(self.tags.len() as i64 + 1)?,
            name: name.clone(),
        };
        self.tags.push(tag.clone());
        Ok(tag)
    }

    fn matches(&self, article: &Article, predicate: &ArticlePredicate) -> bool {
        match predicate {
            ArticlePredicate::Never => false,
            ArticlePredicate::AuthorIn(ids) => ids.contains(&article.author_id),
            ArticlePredicate::FavoritedBy(user_id) => {
                self.favorites.contains(&(*user_id, article.id))
            }
            ArticlePredicate::TaggedWith(name) => self
                .tags
                .iter()
                .find(|tag| &tag.name == name)
                .is_some_and(|tag| self.article_tags.contains(&(article.id, tag.id))),
        }
    }
}

/// In-memory stand-in for every store port. Article inserts are applied to a
/// scratch copy of the state and only swapped in when every step succeeds.
#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
    fail_on_tag: Mutex<Option<String>>,
    unhealthy: AtomicBool,
    favorite_writes: AtomicUsize,
    single_reads: AtomicUsize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_user(&self, id: i64, username: &str, token: Option<&str>) -> User {
        let user = User::new(UserId::new(id).unwrap(), Username::new(username).unwrap());
        let mut state = self.state.lock().unwrap();
        state.users.push(user.clone());
        if let Some(token) = token {
            state.tokens.insert(token.to_string(), user.id);
        }
        user
    }

    /// Make the next article insert fail when it reaches the tag `name`.
    pub fn fail_when_resolving_tag(&self, name: &str) {
        *self.fail_on_tag.lock().unwrap() = Some(name.to_string());
    }

    pub fn set_unhealthy(&self) {
        self.unhealthy.store(true, Ordering::SeqCst);
    }

    /// Number of favorite insert/delete calls that reached the store.
    pub fn favorite_writes(&self) -> usize {
        self.favorite_writes.load(Ordering::SeqCst)
    }

    /// Number of single-article author, tag and favorite lookups served.
    pub fn single_reads(&self) -> usize {
        self.single_reads.load(Ordering::SeqCst)
    }

    pub fn article_count(&self) -> usize {
        self.state.lock().unwrap().articles.len()
    }

    pub fn tag_names(&self) -> Vec<String> {
        let state = self.state.lock().unwrap();
        let mut names: Vec<String> = state
            .tags
            .iter()
            .map(|tag| tag.name.as_str().to_string())
            .collect();
        names.sort();
        names
    }

    pub fn article_tag_count(&self) -> usize {
        self.state.lock().unwrap().article_tags.len()
    }

    pub fn favorite_rows(&self) -> usize {
        self.state.lock().unwrap().favorites.len()
    }
}

#[async_trait]
impl UserDirectory for InMemoryStore {
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        self.single_reads.fetch_add(1, Ordering::SeqCst);
        let state = self.state.lock().unwrap();
        Ok(state.users.iter().find(|user| user.id == id).cloned())
    }

    async fn find_by_ids(&self, ids: &[UserId]) -> DomainResult<Vec<User>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .users
            .iter()
            .filter(|user| ids.contains(&user.id))
            .cloned()
            .collect())
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .users
            .iter()
            .find(|user| &user.username == username)
            .cloned())
    }

    async fn find_by_token(&self, token: &str) -> DomainResult<Option<User>> {
        let state = self.state.lock().unwrap();
        let Some(id) = state.tokens.get(token) else {
            return Ok(None);
        };
        Ok(state.users.iter().find(|user| user.id == *id).cloned())
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryStore {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let fail_on = self.fail_on_tag.lock().unwrap().clone();
        let mut guard = self.state.lock().unwrap();
        let mut draft = guard.clone();

        if draft.articles.iter().any(|a| a.slug == article.slug) {
            return Err(DomainError::AlreadyExists(
                "article slug already exists. Please choose another title.".into(),
            ));
        }

        let NewArticle {
            author_id,
            slug,
            title,
            description,
            body,
            created_at,
            tags,
        } = article;

        let created = Article {
            id: ArticleId::new(draft.articles.len() as i64 + 1)?,
            author_id,
            slug,
            title,
            description,
            body,
            created_at,
        };
        draft.articles.push(created.clone());

        for name in &tags {
            if fail_on.as_deref() == Some(name.as_str()) {
                return Err(DomainError::Persistence(format!(
                    "simulated failure resolving tag {name}"
                )));
            }
            let tag = draft.resolve_tag(name)?;
            draft.article_tags.insert((created.id, tag.id));
        }

        *guard = draft;
        Ok(created)
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryStore {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let state = self.state.lock().unwrap();
        Ok(state.articles.iter().find(|a| a.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let state = self.state.lock().unwrap();
        Ok(state.articles.iter().find(|a| &a.slug == slug).cloned())
    }

    async fn slug_exists(&self, slug: &ArticleSlug) -> DomainResult<bool> {
        let state = self.state.lock().unwrap();
        Ok(state.articles.iter().any(|a| &a.slug == slug))
    }

    async fn list(&self, filter: &ArticleFilter) -> DomainResult<Vec<Article>> {
        let state = self.state.lock().unwrap();
        let mut matched: Vec<Article> = state
            .articles
            .iter()
            .filter(|article| {
                filter
                    .predicates()
                    .iter()
                    .all(|predicate| state.matches(article, predicate))
            })
            .cloned()
            .collect();

        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        let offset = filter.offset.unwrap_or(0) as usize;
        let limit = filter.limit.map_or(usize::MAX, |limit| limit as usize);
        Ok(matched.into_iter().skip(offset).take(limit).collect())
    }
}

#[async_trait]
impl TagRepository for InMemoryStore {
    async fn list(&self, article: Option<ArticleId>) -> DomainResult<Vec<Tag>> {
        if article.is_some() {
            self.single_reads.fetch_add(1, Ordering::SeqCst);
        }
        let state = self.state.lock().unwrap();
        let mut tags: Vec<Tag> = state
            .tags
            .iter()
            .filter(|tag| match article {
                Some(article_id) => state.article_tags.contains(&(article_id, tag.id)),
                None => true,
            })
            .cloned()
            .collect();
        tags.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(tags)
    }

    async fn list_for_articles(
        &self,
        articles: &[ArticleId],
    ) -> DomainResult<Vec<(ArticleId, Tag)>> {
        let state = self.state.lock().unwrap();
        let mut pairs: Vec<(ArticleId, Tag)> = state
            .article_tags
            .iter()
            .filter(|(article_id, _)| articles.contains(article_id))
            .filter_map(|(article_id, tag_id)| {
                state
                    .tags
                    .iter()
                    .find(|tag| tag.id == *tag_id)
                    .map(|tag| (*article_id, tag.clone()))
            })
            .collect();
        pairs.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.name.cmp(&b.1.name)));
        Ok(pairs)
    }
}

#[async_trait]
impl FavoriteRepository for InMemoryStore {
    async fn exists(&self, user_id: UserId, article_id: ArticleId) -> DomainResult<bool> {
        self.single_reads.fetch_add(1, Ordering::SeqCst);
        let state = self.state.lock().unwrap();
        Ok(state.favorites.contains(&(user_id, article_id)))
    }

    async fn insert(&self, user_id: UserId, article_id: ArticleId) -> DomainResult<()> {
        self.favorite_writes.fetch_add(1, Ordering::SeqCst);
        let mut state = self.state.lock().unwrap();
        state.favorites.insert((user_id, article_id));
        Ok(())
    }

    async fn delete(&self, user_id: UserId, article_id: ArticleId) -> DomainResult<()> {
        self.favorite_writes.fetch_add(1, Ordering::SeqCst);
        let mut state = self.state.lock().unwrap();
        state.favorites.remove(&(user_id, article_id));
        Ok(())
    }

    async fn count_for_article(&self, article_id: ArticleId) -> DomainResult<u64> {
        self.single_reads.fetch_add(1, Ordering::SeqCst);
        let state = self.state.lock().unwrap();
        Ok(state
            .favorites
            .iter()
            .filter(|(_, id)| *id == article_id)
            .count() as u64)
    }

    async fn count_for_articles(
        &self,
        article_ids: &[ArticleId],
    ) -> DomainResult<HashMap<ArticleId, u64>> {
        let state = self.state.lock().unwrap();
        let mut counts = HashMap::new();
        for (_, article_id) in state.favorites.iter().filter(|(_, id)| article_ids.contains(id)) {
            *counts.entry(*article_id).or_insert(0) += 1;
        }
        Ok(counts)
    }

    async fn favorited_among(
        &self,
        user_id: UserId,
        article_ids: &[ArticleId],
    ) -> DomainResult<HashSet<ArticleId>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .favorites
            .iter()
            .filter(|(user, article_id)| *user == user_id && article_ids.contains(article_id))
            .map(|(_, article_id)| *article_id)
            .collect())
    }
}

#[async_trait]
impl StoreHealth for InMemoryStore {
    async fn ping(&self) -> ApplicationResult<()> {
        if self.unhealthy.load(Ordering::SeqCst) {
            Err(ApplicationError::infrastructure("store unreachable"))
        } else {
            Ok(())
        }
    }
}
