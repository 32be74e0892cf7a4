//! # テスト用モックリポジトリ
//!
//! ユースケーステストで使用するインメモリモックリポジトリ。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! meibo-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::{
    cmp::Ordering,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use meibo_domain::{
    page::{PageRequest, PersonPage, PersonSortField, SortDirection, SortKey},
    person::{Person, PersonDraft, PersonId},
};

use crate::{
    db::{TransactionManager, TxContext},
    error::InfraError,
    repository::PersonRepository,
};

// ===== MockPersonRepository =====

struct MockState {
    persons: Vec<Person>,
    next_id: i64,
}

/// インメモリ実装の PersonRepository
///
/// ID は BIGSERIAL と同様に 1 から連番で採番し、削除後も再利用しない。
#[derive(Clone)]
pub struct MockPersonRepository {
    state: Arc<Mutex<MockState>>,
}

impl MockPersonRepository {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(MockState {
                persons: Vec::new(),
                next_id: 1,
            })),
        }
    }

    /// シードデータとして人物を追加する
    ///
    /// 採番カウンタは追加した人物の ID より大きい値に進める。
    pub fn add_person(&self, person: Person) {
        let mut state = self.state.lock().unwrap();
        state.next_id = state.next_id.max(person.id().as_i64() + 1);
        state.persons.push(person);
    }

    /// 保持している人物の件数
    pub fn count(&self) -> usize {
        self.state.lock().unwrap().persons.len()
    }
}

impl Default for MockPersonRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn compare(a: &Person, b: &Person, sort: &[SortKey]) -> Ordering {
    for key in sort {
        let ord = match key.field {
            PersonSortField::Id => a.id().as_i64().cmp(&b.id().as_i64()),
            PersonSortField::Name => a.name().cmp(b.name()),
            PersonSortField::Cpf => a.cpf().cmp(b.cpf()),
            PersonSortField::PhoneNumber => a.phone_number().cmp(b.phone_number()),
            PersonSortField::BirthDate => a.birth_date().cmp(&b.birth_date()),
            PersonSortField::Adress => a.adress().cmp(b.adress()),
        };
        let ord = match key.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
    Ordering::Equal
}

#[async_trait]
impl PersonRepository for MockPersonRepository {
    async fn find_all_paged(&self, page: &PageRequest) -> Result<PersonPage, InfraError> {
        let state = self.state.lock().unwrap();
        let total_elements = state.persons.len() as i64;

        let mut sorted = state.persons.clone();
        if page.sort().is_empty() {
            sorted.sort_by_key(|p| p.id().as_i64());
        } else {
            // sort_by は安定ソートのため、同値の行は挿入順を保つ
            sorted.sort_by(|a, b| compare(a, b, page.sort()));
        }

        let persons = sorted
            .into_iter()
            .skip(usize::try_from(page.offset()).unwrap_or(usize::MAX))
            .take(usize::try_from(page.limit()).unwrap_or(usize::MAX))
            .collect();

        Ok(PersonPage {
            persons,
            total_elements,
        })
    }

    async fn find_by_id(&self, id: &PersonId) -> Result<Option<Person>, InfraError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .persons
            .iter()
            .find(|p| p.id() == id)
            .cloned())
    }

    async fn save(
        &self,
        _tx: &mut TxContext,
        id: Option<&PersonId>,
        draft: &PersonDraft,
    ) -> Result<Option<Person>, InfraError> {
        let mut state = self.state.lock().unwrap();
        match id {
            None => {
                let person = Person::from_db(
                    PersonId::from_i64(state.next_id),
                    draft.name.clone(),
                    draft.cpf.clone(),
                    draft.phone_number.clone(),
                    draft.birth_date,
                    draft.adress.clone(),
                );
                state.next_id += 1;
                state.persons.push(person.clone());
                Ok(Some(person))
            }
            Some(id) => {
                let Some(pos) = state.persons.iter().position(|p| p.id() == id) else {
                    return Ok(None);
                };
                let person = Person::from_db(
                    *id,
                    draft.name.clone(),
                    draft.cpf.clone(),
                    draft.phone_number.clone(),
                    draft.birth_date,
                    draft.adress.clone(),
                );
                state.persons[pos] = person.clone();
                Ok(Some(person))
            }
        }
    }

    async fn delete_by_id(&self, _tx: &mut TxContext, id: &PersonId) -> Result<bool, InfraError> {
        let mut state = self.state.lock().unwrap();
        let Some(pos) = state.persons.iter().position(|p| p.id() == id) else {
            return Ok(false);
        };
        state.persons.remove(pos);
        Ok(true)
    }
}

// ===== MockTransactionManager =====

/// テスト用の TransactionManager 実装
///
/// モック TxContext を返すだけで、実際のトランザクションは開始しない。
pub struct MockTransactionManager;

#[async_trait]
impl TransactionManager for MockTransactionManager {
    async fn begin(&self) -> Result<TxContext, InfraError> {
        Ok(TxContext::mock())
    }
}
