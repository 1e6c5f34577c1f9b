pub mod core;
pub mod parse;
pub mod catalog;
pub mod query;
pub mod search;

/*
┌────────────────────────────────────────────────────────────────────────────┐
│                         MARQUEE STRUCT ARCHITECTURE                         │
└────────────────────────────────────────────────────────────────────────────┘

┌───────────────────────────────── CORE LAYER ───────────────────────────────┐
│                                                                             │
│  ┌──────────────────────────────┐  ┌──────────────────┐  ┌──────────────┐ │
│  │ struct Show                   │  │ struct Config    │  │ struct Error │ │
│  │ • show_id / kind / title      │  │ • source_path    │  │ • kind       │ │
│  │ • director: Option<String>    │  │ • report_path    │  │ • context    │ │
│  │ • cast: Vec<String>           │  │ • report_label   │  └──────────────┘ │
│  │ • country: Option<String>     │  │ • row_hint       │  ┌──────────────┐ │
│  │ • date_added: Option<Naive..> │  └──────────────────┘  │ enum         │ │
│  │ • release_year: Option<i32>   │                        │ ErrorKind    │ │
│  │ • rating / duration: Option   │   MISSING_LABEL        │ • Io         │ │
│  │ • genres: Vec<String>         │   SENTINEL_YEAR        │ • Parse      │ │
│  └──────────────────────────────┘   SENTINEL_DATE_TEXT   └──────────────┘ │
└─────────────────────────────────────────────────────────────────────────────┘

┌──────────────────────────────── PARSE LAYER ───────────────────────────────┐
│                                                                             │
│  ┌───────────────────────────┐  ┌─────────────────────────────────────┐   │
│  │ struct LineSplitter       │  │ struct FieldNormalizer               │   │
│  │ • split() → [String; 11]  │  │ • scalar() / year() / date()         │   │
│  │   quote-aware comma scan  │  │ • multi(ListOrder) / record()        │   │
│  └───────────────────────────┘  └─────────────────────────────────────┘   │
└─────────────────────────────────────────────────────────────────────────────┘

┌─────────────────────────────── CATALOG LAYER ──────────────────────────────┐
│                                                                             │
│  ┌────────────────────────────────┐  ┌──────────────────────────────────┐ │
│  │ struct Catalog                  │  │ struct CatalogLoader             │ │
│  │ • shows: Vec<Show>              │  │ • row_hint: usize                │ │
│  │ • index: HashMap<String,usize>  │  │ • load() / load_from()           │ │
│  │ • push() / find_by_id()         │  │   header skip, partial on error  │ │
│  └────────────────────────────────┘  └──────────────────────────────────┘ │
└─────────────────────────────────────────────────────────────────────────────┘

┌──────────────────────────── QUERY / SEARCH LAYER ──────────────────────────┐
│                                                                             │
│  ┌──────────────────────────┐  ┌────────────────────────────────────────┐ │
│  │ struct QueryStream<R>    │  │ struct SequentialSearch<'a>            │ │
│  │ • id_block()             │  │ • subset: Vec<&Show>                   │ │
│  │ • next_title()           │  │ • comparisons: u64                     │ │
│  │ • title_block()          │  │ • start() / probe() / finish()         │ │
│  └──────────────────────────┘  └────────────────────────────────────────┘ │
│  ┌──────────────────────────┐  ┌────────────────────────────────────────┐ │
│  │ struct QueryEngine<'a>   │  │ struct SearchReport                    │ │
│  │ • resolve_ids()          │  │ • label / elapsed_secs / comparisons   │ │
│  │ • sort_by_title()        │  │ • render() / write_to()                │ │
│  └──────────────────────────┘  └────────────────────────────────────────┘ │
└─────────────────────────────────────────────────────────────────────────────┘

┌─────────────────────────────── RELATIONSHIPS ──────────────────────────────┐
│                                                                             │
│  CatalogLoader ──uses──> LineSplitter ──feeds──> FieldNormalizer           │
│        │                                              │                     │
│        └──────────fills──> Catalog <──reads──── QueryEngine                │
│                                                       │                     │
│  QueryStream ──id block──> QueryEngine ──subset──> SequentialSearch        │
│       │                                                  │                  │
│       └──title block─────────probes──────────────────────┤                  │
│                                                          └──> SearchReport │
└─────────────────────────────────────────────────────────────────────────────┘
*/
