use crate::ast;
use crate::document;
use crate::document::DocumentSink;
use crate::explorer::Explorer;
use crate::explorer::ExplorerConfig;
use crate::explorer::ExplorerPath;
use crate::schema::Schema;
use crate::schema::SchemaBuilder;
use std::cell::RefCell;
use std::rc::Rc;

pub(crate) const TEST_SCHEMA: &str = r#"
    scalar Date
    scalar Long

    enum Role {
        EDITOR
        ADMIN
        VIEWER
    }

    interface Node {
        id: ID!
    }

    interface Named {
        name: String
    }

    type User implements Node & Named {
        id: ID!
        name: String
        email: String
        role: Role
        avatar(size: Int!, format: String!, rounded: Boolean): String
        friends(first: Int, tags: [String!]!): [User!]!
        posts(filter: PostFilter): [Post!]!
    }

    type Post implements Node {
        id: ID!
        title: String!
        body: String
        author: User!
    }

    type Bot implements Named {
        name: String
        model: String
        version: Int
    }

    type Stats {
        count: Int!
        average: Float
        label: String
    }

    type UserConnection {
        edges: [UserEdge!]!
        pageInfo: PageInfo
        totalCount: Int
    }

    type UserEdge {
        cursor: String!
        node: User!
    }

    type PageInfo {
        hasNextPage: Boolean!
        endCursor: String
    }

    union SearchResult = User | Post | Bot

    input AddressInput {
        street: String!
        city: String!
        zip: Long
        note: String
    }

    input CreateUserInput {
        name: String!
        role: Role!
        address: AddressInput!
        nickname: String
        tags: [String!]
    }

    input PostFilter {
        published: Boolean!
        since: Date
    }

    type Query {
        user(id: ID!): User
        node(id: ID!): Node
        named: Named
        search(term: String!): [SearchResult!]!
        users(first: Int): UserConnection
        stats(from: Date, limit: Long): Stats
        viewer: User
        ping: String
        withList(ids: [ID!]!, limit: Int!): [User!]!
        withDefault(limit: Int! = 10): String
    }

    type Mutation {
        createUser(input: CreateUserInput!): User
        setRole(id: ID!, role: Role!, notify: Boolean!): User
        rate(score: Float!, weight: Long): Stats
    }
"#;

pub(crate) fn test_schema() -> Schema {
    SchemaBuilder::build_from_str(TEST_SCHEMA).expect("test schema builds")
}

/// Re-print `text` through the canonical printer so that expectations can be
/// written in any layout.
pub(crate) fn normalize(text: &str) -> String {
    let doc = ast::operation::parse(text).expect("expected text parses");
    document::serialize(&doc)
}

pub(crate) fn path(text: &str) -> ExplorerPath {
    text.parse().expect("valid explorer path")
}

/// Every text handed to a sink, in order.
#[derive(Clone, Default)]
pub(crate) struct SinkLog(Rc<RefCell<Vec<String>>>);
impl SinkLog {
    pub fn emitted(&self) -> Vec<String> {
        self.0.borrow().to_owned()
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }
}
impl DocumentSink for SinkLog {
    fn document_changed(&mut self, text: String) {
        self.0.borrow_mut().push(text);
    }
}

pub(crate) fn explorer_with_config<'s>(
    schema: &'s Schema,
    config: ExplorerConfig,
    text: &str,
) -> (Explorer<'s>, SinkLog) {
    let sink = SinkLog::default();
    let mut explorer = Explorer::new(schema, config, sink.clone());
    explorer.set_text(text);
    (explorer, sink)
}

pub(crate) fn explorer<'s>(schema: &'s Schema, text: &str) -> (Explorer<'s>, SinkLog) {
    explorer_with_config(schema, ExplorerConfig::new(), text)
}
